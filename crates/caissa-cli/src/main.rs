mod command;
mod data;
mod report;

fn main() -> anyhow::Result<()> {
    command::run()
}
