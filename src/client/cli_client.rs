use clap::Parser;
use crate::client::models::generation::{GenerationResult, Mode};
use crate::client::services::generation_service::GenerationService;
use crate::common::config::{normalize_origin, ClientConfig};

/// Generate UML diagrams from a software requirement without opening the GUI.
#[derive(Debug, Parser)]
#[command(name = "uml-cli", version)]
pub struct CliArgs {
    /// 1 = base diagram only, 2 = base + enhanced (defaults to UML_DEFAULT_MODE)
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Generation service origin, e.g. http://localhost:8000
    #[arg(long)]
    pub origin: Option<String>,

    /// The software requirement; multiple words are joined with spaces
    #[arg(required = true)]
    pub requirement: Vec<String>,
}

/// One `label: url` line per generated diagram.
pub fn format_result(result: &GenerationResult) -> Vec<String> {
    result
        .images()
        .into_iter()
        .map(|(label, url)| format!("{}: {}", label, url))
        .collect()
}

pub async fn run(args: CliArgs, config: &ClientConfig) -> anyhow::Result<()> {
    let origin = match &args.origin {
        Some(raw) => normalize_origin(raw)
            .ok_or_else(|| anyhow::anyhow!("invalid origin '{}', expected an http(s) URL", raw))?,
        None => config.server_origin.clone(),
    };
    let mode = args.mode.unwrap_or(config.default_mode);
    let requirement = args.requirement.join(" ");

    let service = GenerationService::new(origin);
    match service.submit(&requirement, mode).await {
        Ok(result) => {
            for line in format_result(&result) {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            let message = e.user_message();
            Err(anyhow::Error::new(e).context(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_words() {
        let args =
            CliArgs::try_parse_from(["uml-cli", "--mode", "1", "A", "library", "system"]).unwrap();
        assert_eq!(args.mode, Some(Mode::Base));
        assert_eq!(args.requirement.join(" "), "A library system");
        assert!(args.origin.is_none());
    }

    #[test]
    fn rejects_unknown_mode_and_missing_requirement() {
        assert!(CliArgs::try_parse_from(["uml-cli", "--mode", "3", "x"]).is_err());
        assert!(CliArgs::try_parse_from(["uml-cli"]).is_err());
    }

    #[test]
    fn formats_one_line_per_diagram() {
        let result = GenerationResult::Enhanced {
            base: "http://localhost:8000/img/a.png".into(),
            enhanced: "http://localhost:8000/img/b.png".into(),
        };
        assert_eq!(
            format_result(&result),
            vec![
                "Base Diagram: http://localhost:8000/img/a.png".to_string(),
                "Enhanced Diagram: http://localhost:8000/img/b.png".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn invalid_origin_is_rejected_before_sending() {
        let args = CliArgs::try_parse_from(["uml-cli", "--origin", "nope", "library"]).unwrap();
        let err = run(args, &ClientConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("invalid origin"));
    }
}
