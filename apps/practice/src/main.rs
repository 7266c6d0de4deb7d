fn main() -> anyhow::Result<()> {
    spelling_practice::run()
}
