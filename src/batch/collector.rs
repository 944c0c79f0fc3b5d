//! # 文件收集器
//!
//! 根据输入目录和模式收集待处理的器件卡片文件列表。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 进行模式匹配

use crate::error::{DiodesimError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let patterns = self.compile_patterns()?;

        if self.input.is_file() {
            return Ok(vec![self.input.clone()]);
        }

        if !self.input.is_dir() {
            return Ok(vec![]);
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let files = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::matches_any(&patterns, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        Ok(files)
    }

    /// 编译 glob 模式
    fn compile_patterns(&self) -> Result<Vec<glob::Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    DiodesimError::Other(format!("Invalid glob pattern '{}': {}", p, e))
                })
            })
            .collect()
    }

    /// 检查文件名是否匹配任一模式
    fn matches_any(patterns: &[glob::Pattern], path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matching() {
        let patterns = vec![
            glob::Pattern::new("*.dio").unwrap(),
            glob::Pattern::new("*.model").unwrap(),
        ];

        assert!(FileCollector::matches_any(
            &patterns,
            Path::new("dir/1N4148.dio")
        ));
        assert!(FileCollector::matches_any(
            &patterns,
            Path::new("schottky.model")
        ));
        assert!(!FileCollector::matches_any(
            &patterns,
            Path::new("notes.txt")
        ));
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let collector = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(collector.collect().is_err());
    }
}
