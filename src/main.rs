fn main() -> anyhow::Result<()> {
    fib_cli::run()
}
