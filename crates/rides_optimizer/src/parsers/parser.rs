use std::path::Path;

use crate::{problem::ride_problem::RideProblem, solver::submission::Submission};

use super::error::ParseError;

pub trait DatasetParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<RideProblem, ParseError>;

    fn parse_submission<P: AsRef<Path>>(&self, file: P) -> Result<Submission, ParseError>;
}
