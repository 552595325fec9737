use clap::{Parser, Subcommand};
use pgeo::{
  Circle, Geometric, Line, Lseg, ParseMode, Path, Point, Polygon, Randomizer, Rect, Shape,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Parser)]
#[clap(
  name = "pgeo",
  about = "Convert geometric column values between text and JSON",
  version
)]
struct Cli {
  #[clap(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  #[clap(name = "parse", about = "Parse a column text value and print it as JSON")]
  Parse {
    /// point, circle, line, box, path, polygon or lseg
    #[clap(value_parser)]
    shape: Shape,

    /// Text value, e.g. "<(0,0),5>"
    #[clap(value_parser)]
    text: String,

    /// Require the exact enclosing punctuation of the shape
    #[clap(long, action)]
    strict: bool,
  },
  #[clap(name = "format", about = "Read a JSON value and print its column text")]
  Format {
    #[clap(value_parser)]
    shape: Shape,

    /// JSON value; composite shapes take an array of points
    #[clap(value_parser)]
    json: String,
  },
  #[clap(name = "random", about = "Print a random value as column text")]
  Random {
    #[clap(value_parser)]
    shape: Shape,

    /// Seed for reproducible output
    #[clap(long, value_parser)]
    seed: Option<u64>,
  },
}

fn parse<T: Geometric + Serialize>(text: &str, mode: ParseMode) -> pgeo::Result<String> {
  let value = T::parse_with(text, mode)?;
  Ok(serde_json::to_string(&value)?)
}

fn format_json<T: Geometric + DeserializeOwned>(json: &str) -> pgeo::Result<String> {
  let value: T = serde_json::from_str(json)?;
  Ok(value.to_text())
}

fn run(command: Commands) -> pgeo::Result<String> {
  match command {
    Commands::Parse {
      shape,
      text,
      strict,
    } => {
      let mode = if strict {
        ParseMode::Strict
      } else {
        ParseMode::Lenient
      };
      match shape {
        Shape::Point => parse::<Point>(&text, mode),
        Shape::Circle => parse::<Circle>(&text, mode),
        Shape::Line => parse::<Line>(&text, mode),
        Shape::Box => parse::<Rect>(&text, mode),
        Shape::Path => parse::<Path>(&text, mode),
        Shape::Polygon => parse::<Polygon>(&text, mode),
        Shape::Lseg => parse::<Lseg>(&text, mode),
      }
    }
    Commands::Format { shape, json } => match shape {
      Shape::Point => format_json::<Point>(&json),
      Shape::Circle => format_json::<Circle>(&json),
      Shape::Line => format_json::<Line>(&json),
      Shape::Box => Ok(pgeo::unmarshal_box(json.as_bytes())?.to_text()),
      Shape::Path => Ok(pgeo::unmarshal_path(json.as_bytes())?.to_text()),
      Shape::Polygon => Ok(pgeo::unmarshal_polygon(json.as_bytes())?.to_text()),
      Shape::Lseg => Ok(pgeo::unmarshal_lseg(json.as_bytes())?.to_text()),
    },
    Commands::Random { shape, seed } => {
      let mut random = match seed {
        Some(seed) => Randomizer::seeded(seed),
        None => Randomizer::from_entropy(),
      };
      Ok(match shape {
        Shape::Point => random.point().to_text(),
        Shape::Circle => random.circle().to_text(),
        Shape::Line => random.line().to_text(),
        Shape::Box => random.rect().to_text(),
        Shape::Path => random.path(false).to_text(),
        Shape::Polygon => random.polygon().to_text(),
        Shape::Lseg => random.lseg().to_text(),
      })
    }
  }
}

fn main() {
  let args = Cli::parse();
  match run(args.command) {
    Ok(output) => println!("{}", output),
    Err(err) => {
      eprintln!("error: {}", err);
      std::process::exit(1);
    }
  }
}
