use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
    str::FromStr,
};

use crate::instance::{Instance, Item, Number};

pub type Result<T> = std::io::Result<T>;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Invalid value found. Cannot parse {}.", $name),
                ))
            }
        }
    }};
}

/// Reads instances in the line based `kp` format:
///
/// ```text
/// c comment lines start with a c
/// p kp <number of items> <bound>
/// <value> <cost>
/// ...
/// ```
pub trait InstanceReader: Sized {
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<N> InstanceReader for Instance<N>
where
    N: Number + FromStr,
{
    fn try_read_instance<R: BufRead>(reader: R) -> Result<Self> {
        let instance_reader = KnapsackReader::try_new(reader)?;
        let number_of_items = instance_reader.number_of_items();
        let bound = instance_reader.bound();

        let items = instance_reader.collect::<Result<Vec<_>>>()?;
        raise_error_unless!(
            items.len() == number_of_items,
            ErrorKind::InvalidData,
            format!(
                "Header announces {} items, but {} were found",
                number_of_items,
                items.len()
            )
        );

        Ok(Instance::new(items, bound))
    }

    fn try_read_instance_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_instance(buf_reader)
    }
}

/// Streaming parser; yields one [`Item`] per item line after the header was consumed.
pub struct KnapsackReader<R, N> {
    lines: Lines<R>,
    number_of_items: usize,
    bound: N,
}

impl<R: BufRead, N: Number + FromStr> KnapsackReader<R, N> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut instance_reader = Self {
            lines: reader.lines(),
            number_of_items: 0,
            bound: N::zero(),
        };

        (instance_reader.number_of_items, instance_reader.bound) =
            instance_reader.parse_header()?;
        Ok(instance_reader)
    }

    pub fn number_of_items(&self) -> usize {
        self.number_of_items
    }

    pub fn bound(&self) -> N {
        self.bound
    }
}

impl<R: BufRead, N: Number + FromStr> Iterator for KnapsackReader<R, N> {
    type Item = Result<Item<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_item_line().transpose()
    }
}

impl<R: BufRead, N: Number + FromStr> KnapsackReader<R, N> {
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with('c') || line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_header(&mut self) -> Result<(usize, N)> {
        let Some(line) = self.next_non_comment_line()? else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidData,
                "No header found",
            ));
        };

        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Invalid header found; line should start with p"
        );

        raise_error_unless!(
            parts.next() == Some("kp"),
            ErrorKind::InvalidData,
            "Invalid header found; file type should be \"kp\""
        );

        let number_of_items: usize = parse_next_value!(parts, "Header>Number of items");
        let bound: N = parse_next_value!(parts, "Header>Bound");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid header found; expected end of line"
        );

        Ok((number_of_items, bound))
    }

    fn parse_item_line(&mut self) -> Result<Option<Item<N>>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let value: N = parse_next_value!(parts, "Item>Value");
        let cost: N = parse_next_value!(parts, "Item>Cost");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Invalid item found; expected end of line"
        );

        Ok(Some(Item::new(value, cost)))
    }
}
