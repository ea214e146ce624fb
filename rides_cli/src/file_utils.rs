use std::path::{Path, PathBuf};

pub const PROBLEM_EXTENSION: &str = "in";
pub const SUBMISSION_EXTENSION: &str = "out";

/// A problem file and the submission with the same stem next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPair {
    pub problem: PathBuf,
    pub submission: PathBuf,
}

impl DatasetPair {
    pub fn name(&self) -> String {
        self.problem
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Files of `folder_path` (not recursive) with the given extension, sorted.
pub fn read_folder(folder_path: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

pub fn submission_path_for(problem: &Path) -> PathBuf {
    problem.with_extension(SUBMISSION_EXTENSION)
}

/// Problems that have a submission, ignoring the others.
pub fn find_dataset_pairs(folder_path: &Path) -> Result<Vec<DatasetPair>, std::io::Error> {
    Ok(read_folder(folder_path, PROBLEM_EXTENSION)?
        .into_iter()
        .filter_map(|problem| {
            let submission = submission_path_for(&problem);
            submission.is_file().then_some(DatasetPair {
                problem,
                submission,
            })
        })
        .collect())
}
