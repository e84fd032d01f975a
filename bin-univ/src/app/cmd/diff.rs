use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let p = load_poly(&args.poly, args.order.into())?;
    let d = p.differentiate_n(args.times);
    Ok(args.format.render(&d))
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub poly: String,

    #[arg(short = 'n', long, default_value = "1")]
    pub times: usize,

    #[arg(short, long, default_value = "asc")]
    pub order: Order,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
