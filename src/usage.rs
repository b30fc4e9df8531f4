/**
 * True when the command line is a lone `-h`, `--help`, `-V` or `--version`,
 * which clap answers itself
 */
pub fn is_info_request(args : &[String]) -> bool{
    matches!(args, [arg] if matches!(arg.as_str(), "-h" | "--help" | "-V" | "--version"))
}

/// Numbers count as values even with a leading `-`
pub fn is_value(arg : &str) -> bool{
    !arg.starts_with('-') || arg.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list : &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lone_info_flags() {
        for flag in ["-h", "--help", "-V", "--version"] {
            assert!(is_info_request(&args(&[flag])));
        }
        assert!(!is_info_request(&args(&[])));
        assert!(!is_info_request(&args(&["--help", "10"])));
        assert!(!is_info_request(&args(&["10"])));
    }

    #[test]
    fn values_and_flags() {
        assert!(is_value("10"));
        assert!(is_value("-5"));
        assert!(is_value("fast"));
        assert!(is_value("[ffff]"));
        assert!(!is_value("--mss"));
        assert!(!is_value("-x"));
    }
}
