use univ::util::format::table;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let p = load_poly(&args.poly, args.order.into())?;
    let points = parse_points(&args.points)?;
    let head = args.format.render(&p);

    let res = match points { 
        Points::Int(xs) => 
            table("x", xs.iter(), [head].iter(), |x, _| p.eval(x)),
        Points::Real(xs) => 
            table("x", xs.iter(), [head].iter(), |x, _| p.evaluate(**x)),
    };

    Ok(res)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub poly: String,

    #[arg(allow_hyphen_values = true)]
    pub points: String,

    #[arg(short, long, default_value = "asc")]
    pub order: Order,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
