use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use simple_error::{SimpleResult, bail};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
)]
#[clap(rename_all = "kebab_case")]
pub struct Settings {
    /// Mutation records in json format
    #[arg(long = "mutations", value_name = "FILE")]
    pub mutations_filename: String,

    /// Clinical data records in json format, used to resolve each sample's tumor purity
    ///
    /// When no clinical data file is provided, no estimate can be computed and every
    /// record annotates to "NA".
    ///
    #[arg(long = "clinical-data", value_name = "FILE")]
    pub clinical_data_filename: Option<String>,

    /// Directory for all output files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Utf8PathBuf,

    /// Overwrite an existing output directory
    #[arg(long)]
    pub clobber: bool,

    /// Turn on extra debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Checks if a directory does not exist
///
pub fn check_novel_dirname(dirname: &Utf8Path, label: &str) -> SimpleResult<()> {
    if dirname.exists() {
        bail!("{} already exists: \"{}\"", label, dirname);
    }
    Ok(())
}

/// Validate settings and update parameters that can't be processed by clap
///
fn validate_and_fix_settings_impl(settings: Settings) -> SimpleResult<Settings> {
    fn check_required_filename(filename: &str, label: &str) -> SimpleResult<()> {
        if filename.is_empty() {
            bail!("Must specify {label} file");
        }
        if !std::path::Path::new(&filename).exists() {
            bail!("Can't find specified {label} file: '{filename}'");
        }
        Ok(())
    }

    fn check_optional_filename(filename_opt: Option<&String>, label: &str) -> SimpleResult<()> {
        if let Some(filename) = filename_opt {
            if !std::path::Path::new(&filename).exists() {
                bail!("Can't find specified {label} file: '{filename}'");
            }
        }
        Ok(())
    }

    check_required_filename(&settings.mutations_filename, "mutation record")?;

    check_optional_filename(settings.clinical_data_filename.as_ref(), "clinical data")?;

    Ok(settings)
}

pub fn validate_and_fix_settings(settings: Settings) -> Settings {
    match validate_and_fix_settings_impl(settings) {
        Ok(x) => x,
        Err(msg) => {
            eprintln!("Invalid command-line setting: {}", msg);
            std::process::exit(exitcode::USAGE);
        }
    }
}

pub fn parse_settings() -> Settings {
    Settings::parse()
}
