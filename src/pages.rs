use actix_web::{get, web, Responder};

use crate::policy::OfficePolicy;

mod attendance;
mod ledger;
mod payroll;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(get_policy)
        .service(web::scope("/attendance")
            .configure(attendance::config))
        .service(web::scope("/payroll")
            .configure(payroll::config))
        .service(web::scope("/ledger")
            .configure(ledger::config));
}

#[get("/policy")]
async fn get_policy(policy: web::Data<OfficePolicy>) -> impl Responder {
    web::Json(*policy.get_ref())
}
