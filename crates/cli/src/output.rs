//! # 初期化呼び出しの出力先
//!
//! 標準出力、またはファイル。ファイルは同じディレクトリの一時ファイルに
//! 書き込んでから置き換えるため、途中で失敗しても既存の内容は残る。

use std::io::Write;
use std::path::Path;

/// 初期化呼び出しを書き出す。`out` が `None` の場合は標準出力。
pub fn emit(out: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        anyhow::anyhow!("一時ファイルを作成できません ({}): {e}", dir.display())
    })?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| {
        anyhow::anyhow!("出力ファイルを置き換えられません ({}): {}", path.display(), e.error)
    })?;

    tracing::debug!(out = %path.display(), "初期化呼び出しを書き出しました");
    Ok(())
}
