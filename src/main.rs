#[macro_use]
extern crate log;

use crate::checks::{body_contains_expected_text, expected_text, pick_host, status_is_200, HOSTS};
use crate::config::{Configuration, ConfigurationError};
use goose::prelude::*;
use std::time::Duration;
use thiserror::Error;

mod checks;

mod config;

#[derive(Error, Debug)]
enum LoadtestError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigurationError),
    #[error("Load test failed: {0}")]
    Goose(#[from] GooseError),
}

// One iteration of a virtual user: GET a random host, check the status and
// the body, then wait out the scenario's fixed one-second pause.
async fn loadtest_random_host(user: &mut GooseUser) -> TransactionResult {
    let host = pick_host(&HOSTS, &mut rand::thread_rng());
    let mut goose = user.get(host).await?;

    match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            match response.text().await {
                Ok(body) => {
                    if !status_is_200(status) {
                        return user.set_failure(
                            &format!("{}: status is {}, not 200", host, status),
                            &mut goose.request,
                            None,
                            Some(&body),
                        );
                    }
                    if !body_contains_expected_text(host, &body) {
                        return user.set_failure(
                            &format!(
                                "{}: body does not contain {:?}",
                                host,
                                expected_text(host)
                            ),
                            &mut goose.request,
                            None,
                            Some(&body),
                        );
                    }
                }
                Err(e) => {
                    return user.set_failure(
                        &format!("{}: failed to read the body: {}", host, e),
                        &mut goose.request,
                        None,
                        None,
                    );
                }
            }
        }
        Err(e) => {
            warn!("{}: request failed: {}", host, e);
            return user.set_failure(
                &format!("{}: request failed: {}", host, e),
                &mut goose.request,
                None,
                None,
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), LoadtestError> {
    let config = Configuration::from_env()?;

    GooseAttack::initialize()?
        .register_scenario(
            scenario!("LoadtestTransactions")
                .register_transaction(transaction!(loadtest_random_host))
                // sleep(1) between iterations, min == max so it's exact
                .set_wait_time(Duration::from_secs(1), Duration::from_secs(1))?,
        )
        // Every request carries an absolute URL, the host default only
        // satisfies goose's startup validation.
        .set_default(GooseDefault::Host, HOSTS[0])?
        .set_default(GooseDefault::Users, config.users)?
        // Start all users within about a second instead of goose's
        // one-per-second default ramp.
        .set_default(GooseDefault::HatchRate, config.users.to_string().as_str())?
        .set_default(GooseDefault::RunTime, config.run_time)?
        .execute()
        .await?;

    Ok(())
}
