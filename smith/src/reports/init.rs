use std::path::PathBuf;

use draftsmith_core::WriteResult;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            WriteResult::Written => {
                out.section("Created");
                out.added_item(&path);
                out.newline();
                out.preformatted("Next: smith export <file.html>");
            }
            WriteResult::Skipped => {
                out.warning(&format!("{path} already exists, left unchanged"));
            }
        }
    }
}
