use crate::catalog::Plan;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Per-primitive source generator
#[derive(Parser)]
#[command(name = "primgen")]
#[command(version)]
#[command(about = "Generates per-primitive Java sources from templates", long_about = None)]
pub struct Cli {
    /// Log every written file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Template and output roots plus the plan to run.
#[derive(Args, Debug, Clone)]
pub struct Roots {
    /// Directory holding the `.java.ftl` templates
    #[arg(long, value_name = "DIR", env = "PRIMGEN_TEMPLATE_DIR")]
    pub templates: PathBuf,

    /// Root of the generated-source tree
    #[arg(long, value_name = "DIR", env = "PRIMGEN_OUTPUT_DIR")]
    pub output: PathBuf,

    /// Generation plan
    #[arg(long, value_enum, default_value = "all")]
    pub plan: Plan,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand every template of a plan
    Generate {
        #[command(flatten)]
        roots: Roots,
    },
    /// Print the template inputs and generated outputs of a plan
    Files {
        #[command(flatten)]
        roots: Roots,

        /// Only print template files
        #[arg(long, conflicts_with = "outputs")]
        inputs: bool,

        /// Only print generated files
        #[arg(long)]
        outputs: bool,
    },
    /// Print descriptor attributes
    Describe {
        /// Primitive kind (`Int` or `int`); all kinds when omitted
        #[arg(value_name = "KIND")]
        kind: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "primgen",
            "generate",
            "--templates",
            "tpl",
            "--output",
            "out",
            "--plan",
            "collection-primitive",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { roots } => {
                assert_eq!(roots.templates, PathBuf::from("tpl"));
                assert_eq!(roots.output, PathBuf::from("out"));
                assert_eq!(roots.plan, Plan::CollectionPrimitive);
            }
            _ => panic!("expected generate"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_plan_defaults_to_all() {
        let cli = Cli::try_parse_from([
            "primgen", "-v", "files", "--templates", "t", "--output", "o", "--inputs",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Files {
                roots,
                inputs,
                outputs,
            } => {
                assert_eq!(roots.plan, Plan::All);
                assert!(inputs);
                assert!(!outputs);
            }
            _ => panic!("expected files"),
        }
    }

    #[test]
    fn test_inputs_conflicts_with_outputs() {
        let parsed = Cli::try_parse_from([
            "primgen",
            "files",
            "--templates",
            "t",
            "--output",
            "o",
            "--inputs",
            "--outputs",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_describe_args() {
        let cli = Cli::try_parse_from(["primgen", "describe", "double", "--json"]).unwrap();
        match cli.command {
            Commands::Describe { kind, json } => {
                assert_eq!(kind.as_deref(), Some("double"));
                assert!(json);
            }
            _ => panic!("expected describe"),
        }
    }
}
