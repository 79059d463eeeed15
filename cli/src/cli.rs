//! Command-line argument definitions.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "workstation",
    about = "Converge a development workstation and its AWS infrastructure",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Profile to use (base, full, ...); remembered for the next run
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Override workstation root directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Probe sequentially instead of in parallel
    #[arg(long = "no-parallel", global = true, action = clap::ArgAction::SetFalse)]
    pub parallel: bool,

    /// Stop at the first failing item and skip the remaining tasks
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Shell profile to mutate (default: ~/.zshrc)
    #[arg(long, global = true, value_name = "FILE")]
    pub shell_profile: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install missing tools and configure the shell profile
    Install(InstallOpts),
    /// Report which tools are present without changing anything
    Check,
    /// Validate configuration
    Test,
    /// Compose and drive the AWS infrastructure
    #[command(subcommand)]
    Infra(InfraCommand),
    /// Print shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InstallOpts {
    /// Skip specific tasks
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific tasks
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// `infra` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum InfraCommand {
    /// Generate backend, provider and tfvars files
    Render(RenderOpts),
    /// Check name uniqueness and module schemas
    Check,
    /// Run `terragrunt run-all <args>` in an environment
    Run(RunOpts),
    /// Verify that a module's outputs are non-empty
    Outputs(OutputsOpts),
}

/// Options for `infra render`.
#[derive(Parser, Debug, Clone)]
pub struct RenderOpts {
    /// Render only this environment
    #[arg(long)]
    pub env: Option<String>,

    /// Output directory (default: <root>/infra/live)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Options for `infra run`.
#[derive(Parser, Debug, Clone)]
pub struct RunOpts {
    /// Environment to run in
    #[arg(long)]
    pub env: String,

    /// Arguments passed to `terragrunt run-all`
    #[arg(last = true, required = true)]
    pub args: Vec<String>,
}

/// Options for `infra outputs`.
#[derive(Parser, Debug, Clone)]
pub struct OutputsOpts {
    /// Environment to inspect
    #[arg(long)]
    pub env: String,

    /// Module whose outputs to verify
    #[arg(long)]
    pub module: String,
}

/// Options for `completions`.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install_with_profile_short() {
        let cli = Cli::parse_from(["workstation", "-p", "full", "install"]);
        assert_eq!(cli.global.profile, Some("full".to_string()));
        assert!(matches!(cli.command, Command::Install(_)));
    }

    #[test]
    fn parse_install_dry_run_short() {
        let cli = Cli::parse_from(["workstation", "-d", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_install_skip_and_only() {
        let cli = Cli::parse_from(["workstation", "install", "--skip", "npm,pipx"]);
        assert!(matches!(
            &cli.command,
            Command::Install(opts) if opts.skip == ["npm", "pipx"] && opts.only.is_empty()
        ));

        let cli = Cli::parse_from(["workstation", "install", "--only", "profile"]);
        assert!(matches!(
            &cli.command,
            Command::Install(opts) if opts.only == ["profile"]
        ));
    }

    #[test]
    fn parallel_and_policy_defaults() {
        let cli = Cli::parse_from(["workstation", "check"]);
        assert!(cli.global.parallel);
        assert!(!cli.global.fail_fast);
        assert!(cli.global.shell_profile.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "workstation",
            "install",
            "--no-parallel",
            "--fail-fast",
            "--shell-profile",
            ".bashrc",
        ]);
        assert!(!cli.global.parallel);
        assert!(cli.global.fail_fast);
        assert_eq!(cli.global.shell_profile, Some(PathBuf::from(".bashrc")));
    }

    #[test]
    fn parse_infra_render() {
        let cli = Cli::parse_from(["workstation", "infra", "render", "--env", "dev"]);
        assert!(matches!(
            &cli.command,
            Command::Infra(InfraCommand::Render(opts))
                if opts.env.as_deref() == Some("dev") && opts.out.is_none()
        ));
    }

    #[test]
    fn parse_infra_run_passthrough() {
        let cli = Cli::parse_from([
            "workstation",
            "infra",
            "run",
            "--env",
            "prod",
            "--",
            "plan",
            "-lock=false",
        ]);
        assert!(matches!(
            &cli.command,
            Command::Infra(InfraCommand::Run(opts))
                if opts.env == "prod" && opts.args == ["plan", "-lock=false"]
        ));
    }

    #[test]
    fn infra_run_requires_args() {
        assert!(Cli::try_parse_from(["workstation", "infra", "run", "--env", "dev"]).is_err());
    }

    #[test]
    fn parse_infra_outputs() {
        let cli = Cli::parse_from([
            "workstation",
            "infra",
            "outputs",
            "--env",
            "dev",
            "--module",
            "ecr",
        ]);
        assert!(matches!(
            cli.command,
            Command::Infra(InfraCommand::Outputs(OutputsOpts { ref env, ref module }))
                if env == "dev" && module == "ecr"
        ));
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["workstation", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Command::Completions(CompletionsOpts {
                shell: clap_complete::Shell::Zsh
            })
        ));
    }

    #[test]
    fn parse_version_and_verbose() {
        let cli = Cli::parse_from(["workstation", "-v", "version"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Version));
    }
}
