use crate::error::{EngineError, Result};
use crate::filesystem::SourceFile;
use crate::stats::FileStats;
use chrono::Local;
use real_lines_core::language::{LineProcessor, RealLineCounter};
use real_lines_core::parser::{decode_line, split_lines};
use real_lines_core::stats::AnalysisResult;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Count a single file and return its statistics.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn process_file(file: SourceFile) -> Result<FileStats> {
    let SourceFile { path, rel_parts } = file;
    let read_error = |source| EngineError::FileRead {
        path: path.clone(),
        source,
    };

    let handle = File::open(&path).map_err(read_error)?;
    let meta = handle.metadata().map_err(read_error)?;
    let mut reader = BufReader::new(handle);
    let analysis = count_reader(&mut reader).map_err(read_error)?;

    let mut stats = FileStats::new(path);
    stats.rel_parts = rel_parts;
    stats.size = meta.len();
    stats.mtime = meta.modified().ok().map(chrono::DateTime::<Local>::from);
    stats.lines = analysis.lines;
    stats.real_lines = analysis.real_lines;
    stats.ends_in_block_comment = analysis.ends_in_block_comment;
    Ok(stats)
}

/// 行ベースで実コード行を数える
///
/// Input is read up to each `\n` and split again on bare `\r`, so `\n`,
/// `\r\n` and `\r` all end a line. Invalid UTF-8 sequences are dropped.
///
/// # Errors
///
/// Propagates I/O errors from the reader.
pub fn count_reader<R: BufRead>(reader: &mut R) -> std::io::Result<AnalysisResult> {
    let mut counter = RealLineCounter::new();
    let mut line_buf = Vec::new();
    let mut lines = 0;

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        // `\r\n` never straddles two reads, so splitting each read is exact.
        for line in split_lines(&line_buf) {
            lines += 1;
            counter.process_line(&decode_line(line));
        }
    }

    Ok(AnalysisResult {
        lines,
        real_lines: counter.real_lines(),
        ends_in_block_comment: counter.is_in_block_comment(),
    })
}
