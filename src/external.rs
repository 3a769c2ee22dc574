//! External simulation model evaluator.
//!
//! Couples the engine to a simulation executable through exchange
//! files: the candidate decision vector is written one value per line
//! to an input file inside the model directory, the program is run with
//! that directory as its working directory, and a single scalar is read
//! back from an output file.

use crate::dds::Objective;
use crate::error::EvalError;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const DEFAULT_INPUT_FILE: &str = "variables_in.txt";
const DEFAULT_OUTPUT_FILE: &str = "function_out.txt";

/// An [`Objective`] backed by an external program.
///
/// Each evaluation blocks until the program exits; there is no internal
/// timeout or retry. Failures (I/O, nonzero exit, unparsable output)
/// surface as [`EvalError`] and abort the run.
///
/// # Examples
///
/// ```no_run
/// use dds_search::external::ExternalModel;
///
/// let model = ExternalModel::new("./run_model.sh", "models/basin")
///     .with_args(["--fast"])
///     .with_output_file("objective.txt");
/// ```
#[derive(Debug, Clone)]
pub struct ExternalModel {
    program: String,
    args: Vec<String>,
    model_dir: PathBuf,
    input_file: String,
    output_file: String,
}

impl ExternalModel {
    /// Creates an evaluator running `program` inside `model_dir`, using
    /// the default exchange file names `variables_in.txt` and
    /// `function_out.txt`.
    pub fn new(program: impl Into<String>, model_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            model_dir: model_dir.into(),
            input_file: DEFAULT_INPUT_FILE.into(),
            output_file: DEFAULT_OUTPUT_FILE.into(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_input_file(mut self, name: impl Into<String>) -> Self {
        self.input_file = name.into();
        self
    }

    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }
}

impl Objective for ExternalModel {
    fn evaluate(&self, x: &[f64]) -> Result<f64, EvalError> {
        let input = self.model_dir.join(&self.input_file);
        let lines: String = x.iter().map(|v| format!("{v}\n")).collect();
        fs::write(&input, lines)?;

        log::debug!(
            "running {} {:?} in {}",
            self.program,
            self.args,
            self.model_dir.display()
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.model_dir)
            .status()?;
        if !status.success() {
            return Err(EvalError::ModelExit { status });
        }

        let output = self.model_dir.join(&self.output_file);
        let text = fs::read_to_string(&output)?;
        text.trim()
            .parse()
            .map_err(|_| EvalError::OutputParse { text: text.trim().into() })
    }
}
