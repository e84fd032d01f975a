use clap::ValueEnum;
use derive_more::Display;
use univ::DegOrder;

cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Int = i128;
    } else {
        pub type Int = i64;
    }
}

pub type P = univ::Univariate<'x', Int>;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Order { 
    #[default] Asc, 
    Desc
}

impl From<Order> for DegOrder {
    fn from(o: Order) -> Self {
        match o { 
            Order::Asc  => DegOrder::Ascending,
            Order::Desc => DegOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format { 
    #[default] Unicode, 
    Ascii,
    TeX
}

impl Format { 
    pub fn render(&self, p: &P) -> String { 
        use univ::tex::TeX;
        match self { 
            Format::Unicode => format!("{p}"),
            Format::Ascii   => format!("{p:#}"),
            Format::TeX     => p.tex_string(),
        }
    }
}
