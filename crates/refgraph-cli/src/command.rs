use clap::{Parser, Subcommand};
use refgraph::{
    Error, ErrorKind, ErrorOrigin,
    prelude::{BaseDefinition, Config, MemoryCatalog},
};
use std::{
    io::{self, Write},
    path::PathBuf,
};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "refgraph",
    version,
    about = "Derive reverse entity-reference GraphQL fields from a catalog snapshot"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the derived field definitions as JSON.
    Derive {
        /// Catalog snapshot (.toml or .json).
        #[arg(long, short)]
        catalog: PathBuf,

        /// Generator config (TOML).
        #[arg(long, env = "REFGRAPH_CONFIG")]
        config: Option<PathBuf>,

        /// JSON object merged underneath every definition.
        #[arg(long)]
        base: Option<PathBuf>,

        /// Single-line output.
        #[arg(long)]
        compact: bool,

        /// Derive even if the snapshot fails validation.
        #[arg(long)]
        no_validate: bool,
    },

    /// Validate a catalog snapshot and report every problem found.
    Validate {
        #[arg(long, short)]
        catalog: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_with(cli, &mut out)
}

pub fn run_with(cli: Cli, out: &mut impl Write) -> Result<(), Error> {
    match cli.command {
        Command::Derive {
            catalog,
            config,
            base,
            compact,
            no_validate,
        } => {
            let catalog = MemoryCatalog::from_path(&catalog)?;
            if !no_validate {
                catalog.validate()?;
            }

            let config = match config {
                Some(path) => Config::from_path(path)?,
                None => Config::default(),
            };
            let base = match base {
                Some(path) => refgraph::load_base_definition(path)?,
                None => BaseDefinition::new(),
            };

            let derived = refgraph::derive(&catalog, &config, &base)?;
            if compact {
                serde_json::to_writer(&mut *out, &derived)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &derived)?;
            }
            writeln!(out).map_err(write_error)?;
        }

        Command::Validate { catalog } => {
            let path = catalog;
            let catalog = MemoryCatalog::from_path(&path)?;
            catalog.validate()?;

            tracing::info!(path = %path.display(), "catalog is valid");
            writeln!(
                out,
                "ok: {} entity types, {} fields",
                catalog.entity_types.len(),
                catalog.fields.len()
            )
            .map_err(write_error)?;
        }
    }

    Ok(())
}

fn write_error(err: io::Error) -> Error {
    Error::new(
        ErrorKind::Io,
        ErrorOrigin::Serialize,
        format!("failed to write output: {err}"),
    )
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;

    const CATALOG: &str = r#"{
        "entity_types": [
            { "id": "tag", "capabilities": ["fieldable"] },
            { "id": "article", "capabilities": ["fieldable"] }
        ],
        "fields": [
            {
                "entity_type_id": "article",
                "name": "tags",
                "field_type": "entity_reference",
                "settings": { "target_type": "tag" }
            }
        ]
    }"#;

    fn run_args(args: &[&str]) -> Result<String, Error> {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        let mut out = Vec::new();
        run_with(cli, &mut out)?;

        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn derive_prints_compact_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = dir.path().join("catalog.json");
        let base = dir.path().join("base.json");
        fs::write(&catalog, CATALOG).unwrap();
        fs::write(&base, r#"{ "provider": "graphql_core" }"#).unwrap();

        let out = run_args(&[
            "refgraph",
            "derive",
            "--catalog",
            catalog.to_str().unwrap(),
            "--base",
            base.to_str().unwrap(),
            "--compact",
        ])
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["article-tags"]["name"], "reverseTagsArticle");
        assert_eq!(value["article-tags"]["provider"], "graphql_core");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn derive_localizes_descriptions_from_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = dir.path().join("catalog.json");
        let config = dir.path().join("refgraph.toml");
        fs::write(&catalog, CATALOG).unwrap();
        fs::write(
            &config,
            r#"
[generator]
name_prefix = "inverse"

[translations]
language = "fr"

[translations.strings]
"Reverse reference: @description" = "Référence inverse : @description"
"#,
        )
        .unwrap();

        let out = run_args(&[
            "refgraph",
            "derive",
            "-c",
            catalog.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let def = &value["article-tags"];
        assert_eq!(def["name"], "inverseTagsArticle");
        assert_eq!(def["description"], "Référence inverse : ");
    }

    #[test]
    fn validate_rejects_dangling_reference() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = dir.path().join("catalog.json");
        fs::write(
            &catalog,
            CATALOG.replace("\"target_type\": \"tag\"", "\"target_type\": \"ghost\""),
        )
        .unwrap();

        let err = run_args(&["refgraph", "validate", "-c", catalog.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert!(err.message.contains("ghost"));

        // skipping validation defers the failure to the resolver lookup
        let err = run_args(&[
            "refgraph",
            "derive",
            "-c",
            catalog.to_str().unwrap(),
            "--no-validate",
        ])
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn validate_reports_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, CATALOG).unwrap();

        let out =
            run_args(&["refgraph", "validate", "--catalog", catalog.to_str().unwrap()]).unwrap();
        assert_eq!(out, "ok: 2 entity types, 1 fields\n");
    }
}
