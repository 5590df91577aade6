use super::patterns::LAUNCH_TEST;
use super::LineDetector;
use crate::classifier::ClassifiedFile;
use crate::config::LAUNCH_TEST_PENALTY;

/// rostest `<test>` entries in launch files need reworking into launch tests.
#[derive(Debug, Default)]
pub struct EmbeddedTestDirective {
    uses_rostest: bool,
}

impl LineDetector for EmbeddedTestDirective {
    fn observe(&mut self, line: &[u8]) {
        if !self.uses_rostest {
            self.uses_rostest = LAUNCH_TEST.is_match(line);
        }
    }

    fn finalize(self, _file: &ClassifiedFile) -> u64 {
        if self.uses_rostest {
            LAUNCH_TEST_PENALTY
        } else {
            0
        }
    }
}
