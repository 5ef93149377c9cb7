//! `imgconv <in_file> <out_file>`: convert between BMP and PPM, picking each
//! codec from the file extension.

mod logger;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use imglib::ImageFormat;

#[derive(Parser, Debug)]
#[command(name = "imgconv", version, about = "Convert images between BMP and PPM")]
struct Cli {
    /// Input image (.bmp or .ppm)
    in_file: PathBuf,
    /// Output image (.bmp or .ppm)
    out_file: PathBuf,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Process exit status per failure stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Failure {
    Usage = 1,
    UnknownInputFormat = 2,
    UnknownOutputFormat = 3,
    Load = 4,
    Save = 5,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(Failure::Usage as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logger::init(cli.verbose);

    match run(&cli.in_file, &cli.out_file) {
        Ok(()) => {
            println!("Successfully converted");
            ExitCode::SUCCESS
        }
        Err((failure, err)) => {
            eprintln!("{err:#}");
            ExitCode::from(failure as u8)
        }
    }
}

fn run(in_file: &Path, out_file: &Path) -> Result<(), (Failure, anyhow::Error)> {
    let input = ImageFormat::from_path(in_file).ok_or_else(|| {
        (
            Failure::UnknownInputFormat,
            anyhow!("Unknown format of the input file"),
        )
    })?;
    let output = ImageFormat::from_path(out_file).ok_or_else(|| {
        (
            Failure::UnknownOutputFormat,
            anyhow!("Unknown format of the output file"),
        )
    })?;

    let image = load(input, in_file).map_err(|e| (Failure::Load, e))?;
    log::info!(
        "loaded {}x{} {:?} from {}",
        image.width(),
        image.height(),
        input,
        in_file.display()
    );

    output
        .save(out_file, &image)
        .with_context(|| format!("Saving failed: {}", out_file.display()))
        .map_err(|e| (Failure::Save, e))
}

/// Load `path`, treating an image without pixels as a failed load.
fn load(format: ImageFormat, path: &Path) -> Result<imglib::Image> {
    let image = format
        .load(path)
        .with_context(|| format!("Loading failed: {}", path.display()))?;
    if image.is_empty() {
        bail!("Loading failed: {} has no pixels", path.display());
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imglib::{Color, Image, save_bmp};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("imgconv-{}-{name}", std::process::id()))
    }

    fn failure(in_file: &Path, out_file: &Path) -> Failure {
        run(in_file, out_file).unwrap_err().0
    }

    #[test]
    fn missing_argument_is_usage_error() {
        let err = Cli::try_parse_from(["imgconv", "in.bmp"]).unwrap_err();
        assert!(err.use_stderr());
        assert_eq!(Failure::Usage as u8, 1);
    }

    #[test]
    fn unknown_extensions() {
        let bmp = temp_path("unknown-ext.bmp");
        save_bmp(&bmp, &Image::new(1, 1, Color::WHITE)).unwrap();
        assert_eq!(
            failure(Path::new("photo.jpg"), Path::new("out.bmp")),
            Failure::UnknownInputFormat
        );
        assert_eq!(failure(&bmp, Path::new("out.jpeg")), Failure::UnknownOutputFormat);
        assert_eq!(Failure::UnknownInputFormat as u8, 2);
        assert_eq!(Failure::UnknownOutputFormat as u8, 3);
        std::fs::remove_file(&bmp).ok();
    }

    #[test]
    fn missing_input_is_load_failure() {
        let missing = temp_path("missing.bmp");
        let out = temp_path("missing-out.ppm");
        assert_eq!(failure(&missing, &out), Failure::Load);
        assert_eq!(Failure::Load as u8, 4);
        assert!(!out.exists());
    }

    #[test]
    fn empty_input_is_load_failure() {
        let empty = temp_path("empty.bmp");
        save_bmp(&empty, &Image::new(0, 0, Color::BLACK)).unwrap();
        assert_eq!(failure(&empty, &temp_path("empty-out.ppm")), Failure::Load);
        std::fs::remove_file(&empty).ok();
    }

    #[test]
    fn unwritable_output_is_save_failure() {
        let bmp = temp_path("unwritable-in.bmp");
        save_bmp(&bmp, &Image::new(2, 2, Color::WHITE)).unwrap();
        let out = temp_path("no-such-dir").join("out.ppm");
        assert_eq!(failure(&bmp, &out), Failure::Save);
        assert_eq!(Failure::Save as u8, 5);
        std::fs::remove_file(&bmp).ok();
    }

    #[test]
    fn converts_bmp_to_ppm() {
        let bmp = temp_path("convert.bmp");
        let ppm = temp_path("convert.ppm");
        let mut img = Image::new(3, 2, Color::BLACK);
        img.set_pixel(2, 1, Color::rgb(10, 20, 30));
        save_bmp(&bmp, &img).unwrap();
        run(&bmp, &ppm).unwrap();
        assert_eq!(imglib::load_ppm(&ppm).unwrap(), img);
        std::fs::remove_file(&bmp).ok();
        std::fs::remove_file(&ppm).ok();
    }
}
