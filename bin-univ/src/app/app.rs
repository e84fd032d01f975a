use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{show, add, diff, eval};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    Show(show::Args),
    Add(add::Args),
    Diff(diff::Args),
    Eval(eval::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        let level = match &self.command { 
            Cmd::Show(args) => args.log,
            Cmd::Add(args)  => args.log,
            Cmd::Diff(args) => args.log,
            Cmd::Eval(args) => args.log,
        };
        match level {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<Int>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = univ::util::log::init_simple_logger(l) { 
            eprintln!("logger unavailable: {e}");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Show(args) => show::dispatch(args),
                Cmd::Add(args)  => add::dispatch(args),
                Cmd::Diff(args) => diff::dispatch(args),
                Cmd::Eval(args) => eval::dispatch(args),
            }
        )
    }
}
