use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use godeploy::errors::Result;
use godeploy::exec::{Invocation, ProcessBackend, ProcessOutput};

/// Shared log of every invocation the fake backend received.
pub type Executed = Arc<Mutex<Vec<Invocation>>>;

/// A fake backend that:
/// - records every invocation it is asked to run
/// - answers with the first scripted response whose prefix matches the
///   command line, or with a silent success otherwise.
pub struct FakeBackend {
    executed: Executed,
    responses: Vec<(String, ProcessOutput)>,
}

impl FakeBackend {
    pub fn new(executed: Executed) -> Self {
        Self {
            executed,
            responses: Vec::new(),
        }
    }

    /// Answer commands starting with `prefix` with `output`.
    pub fn respond(mut self, prefix: &str, output: ProcessOutput) -> Self {
        self.responses.push((prefix.to_string(), output));
        self
    }

    /// Make commands starting with `prefix` exit with `code` and `stderr`.
    pub fn fail_on(self, prefix: &str, code: i32, stderr: &str) -> Self {
        self.respond(
            prefix,
            ProcessOutput {
                code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        )
    }
}

impl ProcessBackend for FakeBackend {
    fn execute<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        Box::pin(async move {
            self.executed.lock().unwrap().push(invocation.clone());

            let line = invocation.command_line();
            let output = self
                .responses
                .iter()
                .find(|(prefix, _)| line.starts_with(prefix.as_str()))
                .map(|(_, out)| out.clone())
                .unwrap_or_else(|| ProcessOutput {
                    code: Some(0),
                    ..ProcessOutput::default()
                });
            Ok(output)
        })
    }
}

/// Command lines recorded so far, in execution order.
pub fn command_lines(executed: &Executed) -> Vec<String> {
    executed
        .lock()
        .unwrap()
        .iter()
        .map(Invocation::command_line)
        .collect()
}
