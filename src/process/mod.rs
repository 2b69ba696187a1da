use nix::unistd::{self, Pid};
use procfs::process::Process as ProcfsProcess;

// Identity of the running process

/// The identifier (and name) the operating system assigned to this
/// process. Read once at startup and held immutably for the run.
#[derive(Debug, Clone)]
pub struct ProcessIdentity {
    pub pid: Pid,
    pub name: String,
}

impl ProcessIdentity {
    /// Read the identity of the calling process.
    ///
    /// The pid comes from getpid(), which the OS defines to always
    /// succeed for a running process. The name (comm) comes from
    /// /proc/self; procfs reports a pid there too, and the two sources
    /// must agree.
    pub fn current() -> Result<Self, String> {
        let pid = unistd::getpid();

        let myself = ProcfsProcess::myself()
            .map_err(|e| format!("Failed to read /proc/self: {}", e))?;
        let stat = myself
            .stat()
            .map_err(|e| format!("Failed to read /proc/self/stat: {}", e))?;

        if stat.pid != pid.as_raw() {
            return Err(format!(
                "Pid mismatch between getpid ({}) and /proc/self ({})",
                pid, stat.pid
            ));
        }

        Ok(ProcessIdentity {
            pid,
            name: stat.comm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_std_process_id() {
        let identity = ProcessIdentity::current().unwrap();
        assert_eq!(identity.pid.as_raw() as u32, std::process::id());
    }

    #[test]
    fn current_carries_the_process_name() {
        let identity = ProcessIdentity::current().unwrap();
        assert!(!identity.name.is_empty());
    }

    #[test]
    fn identity_is_stable_across_reads() {
        // The OS assigns the pid at creation; two reads must agree
        let first = ProcessIdentity::current().unwrap();
        let second = ProcessIdentity::current().unwrap();
        assert_eq!(first.pid, second.pid);
    }
}
