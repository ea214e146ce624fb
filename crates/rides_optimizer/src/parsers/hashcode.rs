use std::{path::Path, str::FromStr};

use crate::{
    parsers::{error::ParseError, parser::DatasetParser},
    problem::{
        position::Position,
        ride::RideIdx,
        ride_problem::{RideProblem, RideProblemBuilder},
    },
    solver::submission::Submission,
};

/// Reads the plain text format:
///
/// ```text
/// R C F N B T
/// a b x y s f   (N ride lines)
/// ```
///
/// and submissions made of one `k i1 .. ik` line per car.
pub struct HashCodeParser;

impl DatasetParser for HashCodeParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RideProblem, ParseError> {
        let file_content = std::fs::read_to_string(file)?;
        parse_problem(&file_content)
    }

    fn parse_submission<P: AsRef<Path>>(&self, file: P) -> Result<Submission, ParseError> {
        let file_content = std::fs::read_to_string(file)?;
        parse_submission(&file_content)
    }
}

const VALUES_PER_LINE: usize = 6;

fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

fn parse_fixed_line(line: usize, text: &str) -> Result<[u64; VALUES_PER_LINE], ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != VALUES_PER_LINE {
        return Err(ParseError::WrongTokenCount {
            line,
            expected: VALUES_PER_LINE,
            found: tokens.len(),
        });
    }

    let mut values = [0; VALUES_PER_LINE];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_token(line, token)?;
    }

    Ok(values)
}

fn grid_position(
    line: usize,
    row: u64,
    col: u64,
    rows: u64,
    cols: u64,
) -> Result<Position, ParseError> {
    let position = Position::new(row, col);
    if row >= rows || col >= cols {
        return Err(ParseError::OutOfGrid {
            line,
            position,
            rows,
            cols,
        });
    }

    Ok(position)
}

/// Ride times are not bounded by the horizon: a ride may close after `T`,
/// it then simply cannot score past it.
pub fn parse_problem(text: &str) -> Result<RideProblem, ParseError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(ParseError::MissingLine { line: 1 })?;
    let [rows, cols, fleet_size, ride_count, bonus, horizon] = parse_fixed_line(1, header)?;

    let mut builder = RideProblemBuilder::default();
    builder
        .set_grid(rows, cols)
        .set_fleet_size(fleet_size as usize)
        .set_bonus(bonus)
        .set_horizon(horizon);

    for offset in 0..ride_count {
        // The header line comes first, ride lines are numbered from 2.
        let line = usize::try_from(offset).map_or(usize::MAX, |offset| offset.saturating_add(2));
        let text = lines.next().ok_or(ParseError::MissingLine { line })?;
        let [start_row, start_col, end_row, end_col, earliest_start, latest_finish] =
            parse_fixed_line(line, text)?;

        let start = grid_position(line, start_row, start_col, rows, cols)?;
        let end = grid_position(line, end_row, end_col, rows, cols)?;
        builder.add_ride(start, end, earliest_start, latest_finish);
    }

    Ok(builder.build())
}

/// Blank lines are cars without rides. A line's first value must match the
/// number of ride indices that follow it.
pub fn parse_submission(text: &str) -> Result<Submission, ParseError> {
    let mut itineraries = Vec::new();

    for (line_index, text) in text.lines().enumerate() {
        let line = line_index + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let Some((declared, rides)) = tokens.split_first() else {
            itineraries.push(Vec::new());
            continue;
        };

        let declared: usize = parse_token(line, declared)?;
        if declared != rides.len() {
            return Err(ParseError::MalformedSubmission {
                line,
                declared,
                actual: rides.len(),
            });
        }

        let rides = rides
            .iter()
            .map(|token| parse_token::<RideIdx>(line, token))
            .collect::<Result<Vec<_>, _>>()?;

        itineraries.push(rides);
    }

    Ok(Submission::new(itineraries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_problem() {
        let problem = parse_problem("2 2 1 1 0 3\n0 0 1 1 0 2").unwrap();

        assert_eq!(problem.rows(), 2);
        assert_eq!(problem.cols(), 2);
        assert_eq!(problem.fleet_size(), 1);
        assert_eq!(problem.ride_count(), 1);
        assert_eq!(problem.bonus(), 0);
        assert_eq!(problem.horizon(), 3);

        let ride = problem.ride(RideIdx::new(0));
        assert_eq!(ride.start(), Position::new(0, 0));
        assert_eq!(ride.end(), Position::new(1, 1));
        assert_eq!(ride.earliest_start(), 0);
        assert_eq!(ride.latest_finish(), 2);
    }

    #[test]
    fn test_parse_problem_ignores_lines_past_ride_count() {
        let problem = parse_problem("3 4 2 1 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n").unwrap();

        assert_eq!(problem.ride_count(), 1);
    }

    #[test]
    fn test_parse_problem_missing_ride_line() {
        let error = parse_problem("3 4 2 3 2 10\n0 0 1 3 2 9\n").unwrap_err();

        assert!(matches!(error, ParseError::MissingLine { line: 3 }));
    }

    #[test]
    fn test_parse_problem_invalid_token() {
        let error = parse_problem("2 2 1 1 0 3\n0 0 x 1 0 2").unwrap_err();

        assert!(matches!(
            error,
            ParseError::InvalidToken { line: 2, ref token } if token == "x"
        ));
    }

    #[test]
    fn test_parse_problem_short_header() {
        let error = parse_problem("2 2 1 1 0").unwrap_err();

        assert!(matches!(
            error,
            ParseError::WrongTokenCount {
                line: 1,
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_parse_problem_huge_ride_count() {
        let error = parse_problem("1 1 1 18446744073709551615 0 1\n").unwrap_err();

        assert!(matches!(error, ParseError::MissingLine { line: 2 }));
    }

    #[test]
    fn test_parse_problem_ride_outside_grid() {
        let error =
            parse_problem("2 2 1 1 0 3\n18446744073709551615 18446744073709551615 0 0 0 3")
                .unwrap_err();

        assert!(matches!(
            error,
            ParseError::OutOfGrid {
                line: 2,
                rows: 2,
                cols: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_problem_ride_end_outside_grid() {
        let error = parse_problem("3 4 1 2 0 10\n0 0 1 3 0 9\n0 0 1 4 0 9").unwrap_err();

        assert!(matches!(error, ParseError::OutOfGrid { line: 3, .. }));
    }

    #[test]
    fn test_parse_problem_accepts_rides_closing_after_horizon() {
        let problem = parse_problem("2 2 1 1 1 1\n0 0 1 1 0 3").unwrap();

        assert_eq!(problem.ride(RideIdx::new(0)).latest_finish(), 3);
    }

    #[test]
    fn test_parse_problem_empty() {
        assert!(matches!(
            parse_problem("").unwrap_err(),
            ParseError::MissingLine { line: 1 }
        ));
    }

    #[test]
    fn test_parse_submission() {
        let submission = parse_submission("1 0\n2 2 1\n\n0\n").unwrap();

        assert_eq!(
            submission.itineraries(),
            &[
                vec![RideIdx::new(0)],
                vec![RideIdx::new(2), RideIdx::new(1)],
                vec![],
                vec![],
            ]
        );
    }

    #[test]
    fn test_parse_submission_trailing_newline_is_not_a_car() {
        let submission = parse_submission("1 0\n").unwrap();

        assert_eq!(submission.len(), 1);
    }

    #[test]
    fn test_parse_submission_count_mismatch() {
        let error = parse_submission("1 0 0").unwrap_err();

        assert!(matches!(
            error,
            ParseError::MalformedSubmission {
                line: 1,
                declared: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_parse_submission_negative_index() {
        let error = parse_submission("1 -1").unwrap_err();

        assert!(matches!(error, ParseError::InvalidToken { line: 1, .. }));
    }

    #[test]
    fn test_submission_round_trip() {
        let submission = Submission::new(vec![
            vec![RideIdx::new(0), RideIdx::new(4)],
            vec![],
            vec![RideIdx::new(3), RideIdx::new(1), RideIdx::new(2)],
        ]);

        let parsed = parse_submission(&submission.to_string()).unwrap();

        assert_eq!(parsed, submission);
    }

    #[test]
    fn test_problem_round_trip() {
        let text = "3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n2 0 2 2 2 9\n";

        let problem = parse_problem(text).unwrap();

        assert_eq!(problem.to_string(), text);
    }
}
