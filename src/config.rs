use std::fmt;

use anyhow::Result;
use colored::Colorize;
use inquire::{Password, Select, Text};

use crate::catalog::{self, HOSTS, SERVERS};
use crate::types::{Credentials, Settings};

pub const USERNAME_VAR: &str = "SSTV_USERNAME";
pub const PASSWORD_VAR: &str = "SSTV_PASSWORD";
pub const SERVER_VAR: &str = "SSTV_SERVER";
pub const HOST_VAR: &str = "SSTV_HOST";

/// Resolve credentials and server/host codes for this run.
///
/// Environment variables are consulted in both modes. With `env_only` no
/// prompting happens and missing fields stay empty; otherwise every missing
/// field is collected interactively. Server and host codes supplied through
/// the environment must match the known tables exactly.
pub fn resolve_settings(env_only: bool) -> Result<Settings> {
    let mut username = env_value(USERNAME_VAR);
    let mut password = env_value(PASSWORD_VAR);
    let mut server = env_value(SERVER_VAR);
    let mut host = env_value(HOST_VAR);

    if env_only {
        println!("\nLooking for environment variables...");
        for (name, found) in [
            (USERNAME_VAR, !username.is_empty()),
            (PASSWORD_VAR, !password.is_empty()),
            (SERVER_VAR, !server.is_empty()),
            (HOST_VAR, !host.is_empty()),
        ] {
            if found {
                println!("{}", format!("{} set.", name).green());
            } else {
                println!("{}", format!("{} not found.", name).yellow());
            }
        }
        if !server.is_empty() {
            validate_server(&server)?;
        }
        if !host.is_empty() {
            validate_host(&host)?;
        }
    } else {
        if host.is_empty() {
            host = prompt_code("Please choose your host:", HOSTS, "host")?;
        } else {
            validate_host(&host)?;
        }

        if server.is_empty() {
            server = prompt_code("Please choose your server:", SERVERS, "server")?;
        } else {
            validate_server(&server)?;
        }

        if username.is_empty() || password.is_empty() {
            // host was validated above, the lookup cannot miss
            let host_display = catalog::host_name(&host).unwrap_or("your provider");
            let credentials = prompt_credentials(host_display)?;
            username = credentials.username;
            password = credentials.password;
        }
    }

    Ok(Settings {
        credentials: Credentials { username, password },
        server,
        host,
    })
}

/// Strict policy: an unknown server code aborts the run.
pub fn validate_server(code: &str) -> Result<&'static str> {
    match catalog::server_name(code) {
        Some(name) => Ok(name),
        None => anyhow::bail!(
            "\"{}\" is not a recognized server, run again and choose a valid server",
            code
        ),
    }
}

/// Strict policy: an unknown host code aborts the run.
pub fn validate_host(code: &str) -> Result<&'static str> {
    match catalog::host_name(code) {
        Some(name) => Ok(name),
        None => anyhow::bail!(
            "\"{}\" is not a recognized host, run again and choose a valid host",
            code
        ),
    }
}

fn env_value(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

struct TableChoice {
    name: &'static str,
    code: &'static str,
}

impl fmt::Display for TableChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.code)
    }
}

/// Offer a closed list of known codes, so no unrecognized value can come out
/// of the interactive path.
fn prompt_code(
    prompt: &str,
    table: &'static [(&'static str, &'static str)],
    noun: &str,
) -> Result<String> {
    let options: Vec<TableChoice> = table
        .iter()
        .map(|&(name, code)| TableChoice { name, code })
        .collect();
    let choice = Select::new(prompt, options).prompt()?;
    println!(
        "{}",
        format!("You have chosen the {} {}.", choice.name, noun).green()
    );
    Ok(choice.code.to_string())
}

fn prompt_credentials(host_display: &str) -> Result<Credentials> {
    let username =
        Text::new(&format!("Please enter your username for {}:", host_display)).prompt()?;
    println!("{}", format!("Thank you, {}.", username).green());

    let password = Password::new(&format!("Please enter your password for {}:", host_display))
        .without_confirmation()
        .prompt()?;

    Ok(Credentials { username, password })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve_to_names() {
        assert_eq!(validate_server("dnaw").unwrap(), "North America West Random");
        assert_eq!(validate_host("viewstvn").unwrap(), "StreamTVNow");
    }

    #[test]
    fn test_unknown_server_is_rejected() {
        let err = validate_server("dnax").unwrap_err();
        assert!(err.to_string().contains("dnax"));
        assert!(err.to_string().contains("not a recognized server"));
    }

    #[test]
    fn test_unknown_host_is_rejected() {
        let err = validate_host("view999").unwrap_err();
        assert!(err.to_string().contains("view999"));
        assert!(err.to_string().contains("not a recognized host"));
    }
}
