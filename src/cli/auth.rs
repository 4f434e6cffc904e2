//! Account and session CLI commands

use crate::error::{PocketError, PocketResult};
use crate::services::{AuthService, LaunchRoute, LedgerService};
use crate::storage::Storage;

/// Create an account, prompting for the password twice when not given
pub fn handle_register(
    storage: &Storage,
    username: &str,
    password: Option<String>,
) -> PocketResult<()> {
    let auth = AuthService::new(storage);

    let user = match password {
        Some(password) => auth.register(username, &password)?,
        None => {
            let password = prompt_password("Password: ")?;
            let confirm = prompt_password("Confirm password: ")?;
            auth.register_with_confirmation(username, &password, &confirm)?
        }
    };

    println!("Registered user: {}", user.username);
    println!("Log in with: pocket login {}", user.username);
    Ok(())
}

pub fn handle_login(storage: &Storage, username: &str, password: Option<String>) -> PocketResult<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password: ")?,
    };

    let session = AuthService::new(storage).login(username, &password)?;
    println!("Logged in as {}", session);
    Ok(())
}

pub fn handle_logout(storage: &Storage) -> PocketResult<()> {
    let auth = AuthService::new(storage);
    match auth.current_session()? {
        Some(session) => {
            auth.logout()?;
            println!("Logged out {}", session);
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

pub fn handle_whoami(storage: &Storage) -> PocketResult<()> {
    match AuthService::new(storage).current_session()? {
        Some(session) => println!("{}", session),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// Where the app would open, with the next step to take
pub fn handle_status(storage: &Storage) -> PocketResult<()> {
    match LedgerService::new(storage).launch_route()? {
        LaunchRoute::Onboarding => {
            println!("Onboarding not completed.");
            println!("Run: pocket onboard --budget <amount> --currency <symbol>");
        }
        LaunchRoute::Login => {
            println!("Not logged in.");
            println!("Run: pocket login <username>");
        }
        LaunchRoute::Home(session) => {
            println!("Logged in as {}", session);
            println!("Run: pocket summary");
        }
    }
    Ok(())
}

fn prompt_password(prompt: &str) -> PocketResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| PocketError::Io(format!("Failed to read password: {}", e)))
}
