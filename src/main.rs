fn main() -> anyhow::Result<()> {
    polyprobe::cli::run()
}
