use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use label_lens::{acquire, cli, config, error, gemini, ocr, pipeline, render};
use label_lens::ocr::TextExtractor;
use label_lens_common::{analyze_ingredients, parse_analysis_response, AnalysisResult};
use cli::{Cli, Commands};
use config::Config;
use error::{LabelLensError, Result};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("✖ {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "label_lens=debug"
    } else {
        "label_lens=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn write_result(result: &AnalysisResult, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(output, json)?;
    println!("✔ 結果を保存: {}", output.display());
    Ok(())
}

fn read_text_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else if input.is_file() {
        Ok(std::fs::read_to_string(input)?)
    } else {
        Err(LabelLensError::FileNotFound(input.display().to_string()))
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze { image, edit, output } => {
            let config = Config::load()?;
            println!("🔎 label-lens - 原材料解析\n");

            let mut pipeline = pipeline::Pipeline::new(
                ocr::TesseractExtractor::new(config.tesseract_path.clone()),
                gemini::GeminiClient::default(),
                config.api_key(),
            );

            // 1. OCR
            println!("[1/2] テキストを抽出中...");
            let pb = spinner("Processing...");
            let extracted = pipeline.load_image(&image).await.map(str::to_string);
            pb.finish_and_clear();
            let extracted = extracted?;
            println!("✔ テキスト抽出完了\n");

            if edit {
                if let Some(edited) = dialoguer::Editor::new().edit(&extracted)? {
                    pipeline.edit_text(edited);
                }
            } else if cli.verbose {
                println!("Extracted Text:\n{}\n", extracted.trim());
            }

            // 2. Gemini
            println!("[2/2] AI解析中...");
            let pb = spinner("Processing...");
            let route = pipeline.submit().await;
            pb.finish_and_clear();
            let route = route?;
            println!("✔ 解析完了\n");

            if let (Some(result), Some(output)) = (route.payload(), output.as_deref()) {
                write_result(result, output)?;
            }
            print!("{}", render::render_results(route.payload()));
        }

        Commands::Extract { image } => {
            let config = Config::load()?;
            let image = acquire::acquire_image(&image)?;
            let extractor = ocr::TesseractExtractor::new(config.tesseract_path.clone());

            let pb = spinner("Processing...");
            let extracted = extractor.extract(&image).await;
            pb.finish_and_clear();
            println!("{}", extracted?.trim());
        }

        Commands::AnalyzeText { input, output } => {
            let config = Config::load()?;
            let text = read_text_input(&input)?;
            if text.trim().is_empty() {
                return Err(LabelLensError::NothingToSubmit);
            }

            let pb = spinner("Processing...");
            let result = analyze_ingredients(
                &gemini::GeminiClient::default(),
                &text,
                config.api_key().as_deref(),
            )
            .await;
            pb.finish_and_clear();
            let result = result?;

            if let Some(output) = output.as_deref() {
                write_result(&result, output)?;
            }
            print!("{}", render::render_results(Some(&result)));
        }

        Commands::Show { input } => {
            let result = match input {
                Some(path) => Some(load_result(&path)?),
                None => None,
            };
            print!("{}", render::render_results(result.as_ref()));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = Config::load_or_default();

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  モデル: {}", gemini::GeminiClient::default().model_name());
                println!("  OCR言語: {}", ocr::OCR_LANGUAGE);
                println!("  tesseract: {}", config.tesseract_path);
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn load_result(path: &Path) -> Result<AnalysisResult> {
    if !path.is_file() {
        return Err(LabelLensError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_analysis_response(&content)?)
}
