use clap::Parser;

use std::path::PathBuf;

use fqgrep::*;

/// Search for PATTERN in the read sequences in each FILE or standard input.
///
/// PATTERN is a case-insensitive regular expression.
#[derive(Parser, Debug)]
#[command(name = "fqgrep", author, version)]
pub struct Args {
    /// Regular expression to search for
    pub pattern: String,

    /// Input fastq files, optionally compressed ("-" or none for standard input)
    pub files: Vec<String>,

    /// Match the read id (by default, sequence is matched)
    #[arg(short = 'i', long = "id")]
    pub id: bool,

    /// Select nonmatching entries
    #[arg(short = 'v', long = "invert-match")]
    pub invert_match: bool,

    /// Output mismatching entries to the given file (gzipped if it ends with .gz)
    #[arg(short = 'm', long = "mismatches", value_name = "FILE")]
    pub mismatches: Option<PathBuf>,

    /// Output only the number of matching sequences
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Trim output after the match end
    #[arg(short = 'a', long)]
    pub trim_after: bool,

    /// Trim output before the match start
    #[arg(short = 'b', long)]
    pub trim_before: bool,

    /// Trim the match itself, regardless of trimming mode
    #[arg(short = 't', long)]
    pub trim_match: bool,
}

impl Args {
    pub fn config(&self) -> Result<Config> {
        let str_type = if self.id { StrType::Name } else { StrType::Seq };
        let trim_mode = TrimMode::from_flags(self.trim_before, self.trim_after, self.trim_match)?;

        Config::new(str_type, self.invert_match, self.count, trim_mode)
    }

    pub fn inputs(&self) -> Vec<Input<'static>> {
        if self.files.is_empty() {
            vec![Input::Stdin]
        } else {
            self.files.iter().map(|f| Input::from_arg(f)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("fqgrep").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&["ACGT"]).unwrap();
        let config = args.config().unwrap();

        assert_eq!(args.pattern, "ACGT");
        assert_eq!(args.inputs(), vec![Input::Stdin]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags() {
        let args = parse(&["-i", "-v", "-c", "-m", "miss.fq", "read", "a.fq", "-", "b.fq.gz"]).unwrap();
        let config = args.config().unwrap();

        assert_eq!(config.str_type(), StrType::Name);
        assert!(config.invert());
        assert!(config.count());
        assert_eq!(args.mismatches, Some(PathBuf::from("miss.fq")));
        assert_eq!(
            args.inputs(),
            vec![
                Input::File(PathBuf::from("a.fq")),
                Input::Stdin,
                Input::File(PathBuf::from("b.fq.gz")),
            ]
        );
    }

    #[test]
    fn long_flags() {
        let args = parse(&["--trim-before", "--trim-match", "--mismatches=x.fq", "ACGT"]).unwrap();
        let config = args.config().unwrap();

        assert_eq!(config.trim_mode(), TrimMode::Before { match_edge: true });
        assert_eq!(args.mismatches, Some(PathBuf::from("x.fq")));
    }

    #[test]
    fn invalid_trim_flags() {
        let args = parse(&["-a", "-b", "ACGT"]).unwrap();
        assert!(matches!(args.config(), Err(Error::InvalidConfig(_))));

        let args = parse(&["-i", "-a", "read"]).unwrap();
        assert!(matches!(args.config(), Err(Error::InvalidConfig(_))));

        let args = parse(&["-v", "-b", "ACGT"]).unwrap();
        assert!(matches!(args.config(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn missing_pattern() {
        let e = parse(&[]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_flag() {
        let e = parse(&["-x", "ACGT"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnknownArgument);
    }
}
