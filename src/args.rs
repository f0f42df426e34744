//! 命令行参数解析
//!
//! 约定：
//! - `--python-path` 与 `--checksum` 为必需参数
//! - `--store-file` 与 `--format` 为可选参数
//! - 其余无法识别的 token 原样透传给外部识别程序

use crate::error::ArgsError;
use crate::models::SheetFormat;
use std::path::PathBuf;

/// 使用说明文本（缺少必需参数时输出到标准错误）
pub const USAGE: &str = "\
用法: omr_sheet_process --python-path <路径> --checksum <校验和> [选项] [透传参数...]

必需参数:
  --python-path <路径>   识别程序运行时的可执行文件路径
  --checksum <校验和>    任务标识（调用方保证唯一）

可选参数:
  --store-file <路径>    待暂存的答题卡文件
  --format <格式>        考试格式 (jee / neet / mock)，默认 jee
  -h, --help             显示本帮助信息

其余所有参数原样透传给外部识别程序。";

/// 解析后的命令行参数
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// 识别程序运行时路径
    pub python_path: PathBuf,
    /// 任务校验和
    pub checksum: String,
    /// 待暂存的文件（可选）
    pub store_file: Option<PathBuf>,
    /// 考试格式
    pub format: SheetFormat,
    /// 透传参数
    pub passthrough: Vec<String>,
}

impl CliArgs {
    /// 从进程参数解析（跳过程序名）
    pub fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// 从任意迭代器解析
    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut python_path: Option<PathBuf> = None;
        let mut checksum: Option<String> = None;
        let mut store_file: Option<PathBuf> = None;
        let mut format = SheetFormat::default();
        let mut passthrough = Vec::new();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--python-path" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue {
                        flag: "--python-path".to_string(),
                    })?;
                    python_path = Some(PathBuf::from(value));
                }
                "--checksum" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue {
                        flag: "--checksum".to_string(),
                    })?;
                    checksum = Some(value);
                }
                "--store-file" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue {
                        flag: "--store-file".to_string(),
                    })?;
                    store_file = Some(PathBuf::from(value));
                }
                "--format" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue {
                        flag: "--format".to_string(),
                    })?;
                    format = SheetFormat::from_str(&value)
                        .ok_or(ArgsError::UnknownFormat { value })?;
                }
                "-h" | "--help" => return Err(ArgsError::HelpRequested),
                // 无法识别的 token 全部透传
                _ => passthrough.push(arg),
            }
        }

        let python_path = python_path.ok_or(ArgsError::MissingRequired {
            flag: "--python-path".to_string(),
        })?;
        let checksum = checksum.ok_or(ArgsError::MissingRequired {
            flag: "--checksum".to_string(),
        })?;

        Ok(Self {
            python_path,
            checksum,
            store_file,
            format,
            passthrough,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal() {
        let args = CliArgs::parse_from(strings(&[
            "--python-path",
            "/usr/bin/python3",
            "--checksum",
            "abc123",
        ]))
        .unwrap();

        assert_eq!(args.python_path, PathBuf::from("/usr/bin/python3"));
        assert_eq!(args.checksum, "abc123");
        assert_eq!(args.format, SheetFormat::Jee);
        assert!(args.store_file.is_none());
        assert!(args.passthrough.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let args = CliArgs::parse_from(strings(&[
            "--python-path",
            "python3",
            "--store-file",
            "sheet.jpg",
            "--checksum",
            "abc123",
            "--format",
            "neet",
        ]))
        .unwrap();

        assert_eq!(args.store_file, Some(PathBuf::from("sheet.jpg")));
        assert_eq!(args.format, SheetFormat::Neet);
    }

    #[test]
    fn test_unknown_tokens_are_passthrough() {
        let args = CliArgs::parse_from(strings(&[
            "--python-path",
            "python3",
            "--checksum",
            "abc123",
            "--autoAlign",
            "-v",
            "extra",
        ]))
        .unwrap();

        assert_eq!(args.passthrough, vec!["--autoAlign", "-v", "extra"]);
    }

    #[test]
    fn test_missing_python_path() {
        let err = CliArgs::parse_from(strings(&["--checksum", "abc123"])).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::MissingRequired { ref flag } if flag == "--python-path"
        ));
    }

    #[test]
    fn test_missing_checksum() {
        let err = CliArgs::parse_from(strings(&["--python-path", "python3"])).unwrap_err();
        assert!(matches!(
            err,
            ArgsError::MissingRequired { ref flag } if flag == "--checksum"
        ));
    }

    #[test]
    fn test_flag_without_value() {
        let err = CliArgs::parse_from(strings(&[
            "--python-path",
            "python3",
            "--checksum",
        ]))
        .unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { .. }));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = CliArgs::parse_from(strings(&[
            "--python-path",
            "python3",
            "--checksum",
            "abc123",
            "--format",
            "gaokao",
        ]))
        .unwrap_err();
        assert!(matches!(err, ArgsError::UnknownFormat { .. }));
    }

    #[test]
    fn test_help_flag() {
        let err = CliArgs::parse_from(strings(&["-h"])).unwrap_err();
        assert!(matches!(err, ArgsError::HelpRequested));
    }
}
