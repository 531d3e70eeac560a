// src/cli/args.rs
use clap::{ArgAction, Parser};

use super::{parsers::DelimiterArg, value_enum::CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "csv_aggregate",
    version = crate::VERSION,
    about = "標準入力の CSV をキー列でグループ化し、指定列を集計して標準出力へ書き出します",
    long_about = Some(include_str!("../../usage.txt"))
)]
pub struct Args {
    /// 合計を求める列名（複数指定可）
    #[arg(long, value_name = "NAME", help_heading = "集計")]
    pub sum: Vec<String>,

    /// 最小値を求める列名（複数指定可）
    #[arg(long, value_name = "NAME", help_heading = "集計")]
    pub min: Vec<String>,

    /// 最大値を求める列名（複数指定可）
    #[arg(long, value_name = "NAME", help_heading = "集計")]
    pub max: Vec<String>,

    /// ソートキーの列名（複数指定可、先に指定したものが優先）
    #[arg(long, value_name = "NAME", help_heading = "出力")]
    pub sort: Vec<String>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "csv", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// フィールド区切り文字（入力・出力共通, 例: ';', tab, pipe）
    #[arg(long, default_value = ",", value_name = "CHAR", help_heading = "入出力")]
    pub delimiter: DelimiterArg,

    /// 出力の改行を CRLF にする
    #[arg(long, help_heading = "入出力")]
    pub crlf: bool,

    /// 診断ログを詳しくする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "診断")]
    pub verbose: u8,

    /// 診断ログを出さない
    #[arg(short, long, conflicts_with = "verbose", help_heading = "診断")]
    pub quiet: bool,
}
