fn main() -> std::process::ExitCode {
    repo_showcase::run()
}
