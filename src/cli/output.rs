//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use cutline::CutlineError;
use cutline::analysis::{ScoreAnalysis, Verdict};
use cutline::assets::LogoResolver;
use cutline::dashboard::SelectionState;
use cutline::records::{Comment, ExamResult, format_number};
use cutline::tui::components::render_analysis;

/// Writes one line per university with its logo reference.
pub fn write_university_listing<W: Write>(
    writer: &mut W,
    names: &[String],
    logos: &LogoResolver,
) -> Result<(), CutlineError> {
    if names.is_empty() {
        writeln!(writer, "No universities found.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    writeln!(writer, "Universities:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    for name in names {
        let logo = logos.resolve(name);
        writeln!(writer, "  {name}  ({})", logo.reference()).map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "{} universities", names.len()).map_err(|e| io_error(&e))?;
    Ok(())
}

/// Writes the results visible under `selection`, classified when a score is
/// set.
pub fn write_result_listing<W: Write>(
    writer: &mut W,
    selection: &SelectionState,
    results: &[ExamResult],
) -> Result<(), CutlineError> {
    let university = selection.university().unwrap_or_default();
    let visible = selection.visible_results(results);

    writeln!(
        writer,
        "Results for {university} ({})",
        selection.time_slot().label()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if visible.is_empty() {
        writeln!(writer, "No results for this time slot.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    let score = selection.score_value();
    for result in &visible {
        writeln!(
            writer,
            "  #{} {} {} {}  rank {}  rate {}  avg {}  cutoff {}  {}",
            result.id,
            result.year,
            result.exam_time_label(),
            result.department,
            result.reserve_rank_label(),
            result.competition_rate_label(),
            result.average_label(),
            result.cutoff_label(),
            render_analysis(result, score),
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "{} of {} results shown", visible.len(), results.len())
        .map_err(|e| io_error(&e))?;
    Ok(())
}

/// Writes a note explaining that a score was ignored under the `All` filter.
pub fn write_score_ignored_note<W: Write>(writer: &mut W) -> Result<(), CutlineError> {
    writeln!(
        writer,
        "Note: score ignored; choose a time slot with --time-slot to classify results."
    )
    .map_err(|e| io_error(&e))
}

/// Writes one result's figures, the verdict for `score` and its discussion.
pub fn write_result_detail<W: Write>(
    writer: &mut W,
    result: &ExamResult,
    score: f64,
    comments: &[Comment],
) -> Result<(), CutlineError> {
    let analysis = ScoreAnalysis::for_result(result, score);
    let verdict = Verdict::for_classification(analysis.classification);

    writeln!(
        writer,
        "{} {} {} {}",
        result.year,
        result.exam_time_label(),
        result.university,
        result.department
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Competition: {}  Reserve rank: {}  Average: {}  Cutoff: {}",
        result.competition_rate_label(),
        result.reserve_rank_label(),
        result.average_label(),
        result.cutoff_label()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Score {}: [{}] {} ({} vs cutoff)",
        format_number(score),
        analysis.classification,
        verdict.headline,
        analysis.difference_label()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "{}", verdict.explanation).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    write_comment_thread(writer, comments)
}

/// Writes a comment thread, newest first.
pub fn write_comment_thread<W: Write>(
    writer: &mut W,
    comments: &[Comment],
) -> Result<(), CutlineError> {
    writeln!(writer, "Discussion ({})", comments.len()).map_err(|e| io_error(&e))?;
    if comments.is_empty() {
        writeln!(writer, "  No comments yet.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for comment in comments {
        writeln!(
            writer,
            "  {}  {}",
            comment.nickname,
            comment.short_timestamp()
        )
        .map_err(|e| io_error(&e))?;
        for line in comment.content.lines() {
            writeln!(writer, "    {line}").map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

/// Converts an I/O error to a [`CutlineError::Io`].
pub(crate) fn io_error(error: &io::Error) -> CutlineError {
    CutlineError::Io {
        message: error.to_string(),
    }
}
