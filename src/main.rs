use object_user_provider::application_port::UserProvider;
use object_user_provider::bootstrap::Directory;
use object_user_provider::logger::*;
use object_user_provider::settings::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    debug!(?project_settings);
    logger.reload_from_settings(&project_settings.log)?;

    let directory = Directory::try_new(&project_settings).await?;

    match directory.provider.load_user_by_identifier(&cli.lookup).await {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(())
        }
        Err(e) => {
            error!(identifier = %cli.lookup, "lookup failed: {e}");
            Err(e.into())
        }
    }
}
