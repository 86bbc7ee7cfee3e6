use std::{env, net::{SocketAddr, ToSocketAddrs as _}, str::FromStr};

use chrono::NaiveTime;
use tracing::info;

use crate::{consts, error::ConfigError, policy::OfficePolicy};

pub struct Config {
    pub host_address: SocketAddr,

    pub policy: OfficePolicy,
}

pub fn load() -> Result<Config, ConfigError> {
    Ok(Config {
        host_address: load_host_address()?,
        policy: load_policy()?,
    })
}

fn load_host_address() -> Result<SocketAddr, ConfigError> {
    info!("Loading environment `HOST_ADDRESS`");

    let var = env::var("HOST_ADDRESS").unwrap_or_else(|_| "127.0.0.1:0".to_string());

    var.to_socket_addrs()
        .map_err(ConfigError::UnresolvedHost)?
        .next()
        .ok_or(ConfigError::InvalidValue { name: "HOST_ADDRESS", value: var })
}

fn load_policy() -> Result<OfficePolicy, ConfigError> {
    let office_start = load_clock("OFFICE_START_TIME", consts::OFFICE_START_TIME)?;
    let office_end = load_clock("OFFICE_END_TIME", consts::OFFICE_END_TIME)?;
    let working_hours_per_day = load_parsed("WORKING_HOURS_PER_DAY", consts::WORKING_HOURS_PER_DAY)?;
    let days_per_month = load_parsed("DAYS_PER_MONTH", consts::DAYS_PER_MONTH)?;

    Ok(OfficePolicy::new(office_start, office_end, working_hours_per_day, days_per_month)?)
}

fn load_clock(name: &'static str, default: NaiveTime) -> Result<NaiveTime, ConfigError> {
    info!("Loading environment `{name}`");

    match env::var(name) {
        Ok(var) => parse_clock(name, var),
        Err(_) => Ok(default),
    }
}

fn parse_clock(name: &'static str, var: String) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(&var, "%H:%M")
        .map_err(|_| ConfigError::InvalidValue { name, value: var })
}

fn load_parsed<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    info!("Loading environment `{name}`");

    match env::var(name) {
        Ok(var) => var.parse().map_err(|_| ConfigError::InvalidValue { name, value: var }),
        Err(_) => Ok(default),
    }
}
