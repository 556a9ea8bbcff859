mod args;

use {
    anyhow::Result as Anyhow,
    args::{Cli, Export, Import, SubCommand},
    clap::Parser,
    convert::{ExportConfig, ImportConfig},
};

fn main() -> Anyhow<()> {
    let cli = Cli::parse();
    log_init(cli.log_level)?;

    match cli.command {
        SubCommand::Export(export) => export.exec(),
        SubCommand::Import(import) => import.exec(),
    }
}

impl Export {
    fn exec(self) -> Anyhow<()> {
        let config = ExportConfig {
            source_path: self.source,
            dest_path: self.output,
            luma: self.luma,
        };
        let exported = convert::export_with(&config)?;
        log::info!("{}x{} -> {}", exported.wide, exported.high, exported.dest_path);
        Ok(())
    }
}

impl Import {
    fn exec(self) -> Anyhow<()> {
        let config = ImportConfig {
            source_path: self.source,
            dest_path: self.output,
            wide: self.width,
            high: self.height,
            range: self.range,
        };
        let imported = convert::import_with(&config)?;
        println!("Done! Open file {} to see the result.", imported.dest_path);
        Ok(())
    }
}

fn log_init(filter: log::LevelFilter) -> Anyhow<()> {
    use simplelog::*;
    let term = TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    CombinedLogger::init(vec![term])?;
    Ok(())
}
