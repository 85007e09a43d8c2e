// vitalis-client/examples/session_demo.rs
// Restore or open a session and list what the user may see

use tracing_subscriber::EnvFilter;
use vitalis_client::nav::{home_for, nav_links};
use vitalis_client::{ClientConfig, Route, VitalisClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let client = VitalisClient::new(ClientConfig::from_env())?;
    client.initialize();

    if !client.session().is_authenticated() {
        if args.len() < 3 {
            println!("Usage: {} <email> <senha>", args[0]);
            println!("  Example: {} joao@email.com 123456", args[0]);
            return Ok(());
        }
        client.login(&args[1], &args[2]).await?;
    }

    let Some(identity) = client.session().identity() else {
        anyhow::bail!("backend returned a credential without a usable identity");
    };
    tracing::info!(subject = %identity.subject, role = identity.role.label(), "Signed in");
    println!("Home: {}", home_for(identity.role).path());
    for link in nav_links(identity.role) {
        println!("  {:<20} {}", link.label, link.path());
    }

    for route in Route::ALL {
        let mut guard = client.guard(route);
        println!("{:<22} {:?}", route.path(), guard.outcome());
    }

    match client.clinics(None).await {
        Ok(clinics) => {
            for clinic in clinics {
                println!("#{} {} ({})", clinic.id, clinic.nome_fantasia, clinic.especialidade);
            }
        }
        Err(e) => tracing::error!("Failed to list clinics: {}", e.user_message()),
    }

    Ok(())
}
