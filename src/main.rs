use iced::Application;
use uml_generator::client::gui::app::GeneratorApp;
use uml_generator::common::config::ClientConfig;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let config = ClientConfig::from_env();
    config.init_logging();

    let settings = iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(760.0, 620.0),
            ..Default::default()
        },
        ..iced::Settings::with_flags(config)
    };
    GeneratorApp::run(settings)?;
    Ok(())
}
