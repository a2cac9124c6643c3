use std::{io::Read, path::PathBuf};

use clap::Parser;

use mathbridge::{
    Converter, EncodingOptions, MathmlOptions, PurifiedTexOptions, TexError,
};

mod config_file;

use config_file::{load_config_file, Config, Encoding, OtherEncoding, Spacing};

/// Converts TeX math formulas to MathML
#[derive(Parser, Debug)]
#[command(version, about = "Converts TeX math formulas to MathML", long_about = None)]
struct Args {
    /// Specifies a single TeX formula (read from stdin otherwise)
    #[arg(short, long)]
    formula: Option<String>,

    /// Print a standalone LaTeX document instead of MathML
    #[arg(long)]
    purified_tex: bool,

    /// Enable the texvc compatibility macros (\R, \implies, \arccot, ...)
    #[arg(long)]
    texvc_compatible_commands: bool,

    /// How aggressively spacing markup is written into the MathML
    #[arg(long, value_enum, value_name = "MODE")]
    spacing: Option<Spacing>,

    /// Write MathML 1.x font attributes instead of mathvariant
    #[arg(long)]
    mathml_version_1_fonts: bool,

    /// Keep the output inside the Basic Multilingual Plane
    #[arg(long)]
    disallow_plane_1: bool,

    /// Encoding of MathML characters in the XML output
    #[arg(long, value_enum, value_name = "ENC")]
    mathml_encoding: Option<Encoding>,

    /// Encoding of characters outside MathML's entity lists
    #[arg(long, value_enum, value_name = "ENC")]
    other_encoding: Option<OtherEncoding>,

    /// Pretty-print the XML output
    #[arg(long)]
    indented: bool,

    /// Allow \unichar (from the ucs package) in purified TeX
    #[arg(long, requires = "purified_tex")]
    use_ucs_package: bool,

    /// Read option defaults from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    /// Config file values first, command-line flags on top.
    fn into_config(self) -> Result<(Config, Option<String>), config_file::ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => Config::default(),
        };
        config.purified_tex |= self.purified_tex;
        config.texvc_compatible_commands |= self.texvc_compatible_commands;
        config.mathml_version_1_fonts |= self.mathml_version_1_fonts;
        config.disallow_plane_1 |= self.disallow_plane_1;
        config.indented |= self.indented;
        config.use_ucs_package |= self.use_ucs_package;
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(encoding) = self.mathml_encoding {
            config.mathml_encoding = encoding;
        }
        if let Some(encoding) = self.other_encoding {
            config.other_encoding = encoding;
        }
        Ok((config, self.formula))
    }
}

fn main() {
    let args = Args::parse();
    let (config, formula) = args.into_config().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let input = match formula {
        Some(formula) => formula,
        None => read_stdin(),
    };
    match convert(input.trim(), &config) {
        Ok(output) => println!("{}", output),
        Err(e) => exit_tex_error(e),
    }
}

fn convert(latex: &str, config: &Config) -> Result<String, TexError> {
    let mut converter = Converter::new();
    converter.process_input(latex, config.texvc_compatible_commands)?;

    if config.purified_tex {
        let options = PurifiedTexOptions {
            use_ucs_package: config.use_ucs_package,
        };
        return converter.generate_purified_tex(&options);
    }

    let options = MathmlOptions {
        spacing_control: config.spacing.into(),
        fancy_font_substitution: !config.disallow_plane_1,
        use_version1_font_attributes: config.mathml_version_1_fonts,
        ..MathmlOptions::default()
    };
    let xml = converter.generate_mathml(&options)?;
    let encoding = EncodingOptions {
        mathml_encoding: config.mathml_encoding.into(),
        other_encoding_raw: matches!(config.other_encoding, OtherEncoding::Raw),
        allow_plane_1: !config.disallow_plane_1,
    };
    Ok(xml.print(&encoding, config.indented))
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        exit_io_error(e);
    }
    buffer
}

fn exit_tex_error(e: TexError) -> ! {
    eprintln!("Conversion error: {}", e);
    std::process::exit(2);
}

fn exit_io_error(e: std::io::Error) -> ! {
    eprintln!("IO Error: {}", e);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mathml_output() {
        let config = Config::default();
        let mathml = convert("x^2", &config).unwrap();
        assert_eq!(mathml, "<msup><mi>x</mi><mn>2</mn></msup>");
    }

    #[test]
    fn purified_tex_output() {
        let config = Config {
            purified_tex: true,
            ..Config::default()
        };
        let doc = convert(r"\frac12", &config).unwrap();
        assert!(doc.starts_with("\\nonstopmode\n"));
        assert!(doc.contains("\\frac{ 1}{ 2}"));
    }

    #[test]
    fn texvc_commands_need_the_flag() {
        let config = Config::default();
        assert!(convert(r"\R", &config).is_err());

        let config = Config {
            texvc_compatible_commands: true,
            ..Config::default()
        };
        let mathml = convert(r"\R", &config).unwrap();
        assert_eq!(mathml, "<mi>&#x211d;</mi>");
    }

    #[test]
    fn tex_errors_propagate() {
        let config = Config::default();
        assert!(convert("x^", &config).is_err());
        assert!(convert(r"\nosuchcommand", &config).is_err());
    }
}
