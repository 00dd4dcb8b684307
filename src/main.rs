fn main() -> std::process::ExitCode {
    type_gen_settings_lib::run()
}
