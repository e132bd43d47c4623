use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "label-lens")]
#[command(about = "食品ラベルの原材料をOCRで読み取りAIで解析するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ラベル画像を読み取り、原材料を解析して表示
    Analyze {
        /// ラベル画像のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 送信前に抽出テキストをエディタで編集
        #[arg(short, long)]
        edit: bool,

        /// 解析結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ラベル画像からテキストを抽出して表示（解析はしない）
    Extract {
        /// ラベル画像のパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 抽出済みテキストを解析（`-` で標準入力）
    AnalyzeText {
        /// テキストファイルのパス
        #[arg(required = true)]
        input: PathBuf,

        /// 解析結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 解析結果JSONをカード表示
    Show {
        /// 解析結果JSON（省略時は空表示）
        input: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
