use std::{
    env,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use csv::ReaderBuilder;

use super::{require_value, split_arg};
use crate::{Error, Result, Site};

const DEFAULT_SITE_FILE: &str = "msg_standorte_deutschland.csv";

/// Ingestion half of the CLI: the site file path and the records read from
/// it. Produced once per run and then only borrowed.
#[derive(Clone, Debug)]
pub struct SolverInput {
    file: PathBuf,
    sites: Vec<Site>,
}

impl SolverInput {
    pub fn from_args() -> Result<Self> {
        let file = Self::parse_cli_args(env::args().skip(1));
        let sites = read_sites(&file)?;
        Ok(Self { file, sites })
    }

    /// Only `--file` belongs to the input layer; every other flag is owned
    /// and validated by `SolverOptions`, so it is skipped here.
    fn parse_cli_args<I, S>(args: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut file = PathBuf::from(DEFAULT_SITE_FILE);
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            let Some(raw_name) = arg.strip_prefix("--") else {
                continue;
            };

            let (name, value) = split_arg(raw_name, &mut args);
            if name == "file"
                && let Ok(value) = require_value(&name, value)
            {
                file = PathBuf::from(value);
            }
        }

        file
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }
}

fn read_sites(path: &Path) -> Result<Vec<Site>> {
    let file = File::open(path).map_err(|err| {
        Error::invalid_data(format!(
            "could not read site file {}: {err}",
            path.display()
        ))
    })?;
    read_sites_from(BufReader::new(file))
}

/// Parses the delimited site list: one header row, then positional columns
/// index, name, street, house number, zip code, city, latitude, longitude.
/// The index column must equal the 1-based row position because tours and
/// the report key stops by it.
fn read_sites_from<R: Read>(reader: R) -> Result<Vec<Site>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sites = Vec::new();
    for (position, record) in csv_reader.records().enumerate() {
        let row = position + 2; // 1-based, after the header
        let record = record?;
        let site: Site = record
            .deserialize(None)
            .map_err(|err| Error::invalid_data(format!("row {row}: {err}")))?;

        if !site.has_valid_coordinates() {
            return Err(Error::invalid_data(format!(
                "row {row}: coordinates out of range: lat={} lng={}",
                site.latitude, site.longitude
            )));
        }
        if site.index != position + 1 {
            return Err(Error::invalid_data(format!(
                "row {row}: site index {} does not match its position {}",
                site.index,
                position + 1
            )));
        }

        sites.push(site);
    }

    if sites.is_empty() {
        return Err(Error::invalid_data("site file contains no records"));
    }

    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SITE_FILE, SolverInput, read_sites_from};
    use std::path::Path;

    const HEADER: &str = "Nummer,Standort,Strasse,Hausnummer,PLZ,Ort,Breitengrad,Laengengrad\n";

    #[test]
    fn parse_cli_args_reads_the_file_flag() {
        let file = SolverInput::parse_cli_args(["--file", "sites.csv"]);
        assert_eq!(file, Path::new("sites.csv"));

        let file = SolverInput::parse_cli_args(["--file=other.csv"]);
        assert_eq!(file, Path::new("other.csv"));
    }

    #[test]
    fn parse_cli_args_falls_back_to_the_default_file() {
        let file = SolverInput::parse_cli_args(["--brute-force", "--log-level", "debug"]);
        assert_eq!(file, Path::new(DEFAULT_SITE_FILE));
    }

    #[test]
    fn read_sites_parses_header_and_positional_columns() {
        let data = format!(
            "{HEADER}\
             1,Berlin,Unter den Linden,1,10117,Berlin,52.5200,13.4050\n\
             2,Munich,Marienplatz,8,80331,Muenchen,48.1351,11.5820\n"
        );

        let sites = read_sites_from(data.as_bytes()).expect("valid file");
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].index, 1);
        assert_eq!(sites[0].name, "Berlin");
        assert_eq!(sites[1].zip_code, "80331");
        assert!((sites[1].latitude - 48.1351).abs() < 1e-12);
    }

    #[test]
    fn read_sites_rejects_non_numeric_coordinates() {
        let data = format!("{HEADER}1,Berlin,Unter den Linden,1,10117,Berlin,north,13.4\n");
        let err = read_sites_from(data.as_bytes()).expect_err("bad latitude");
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn read_sites_rejects_out_of_range_coordinates() {
        let data = format!("{HEADER}1,Nowhere,X,1,0,Y,95.0,13.4\n");
        let err = read_sites_from(data.as_bytes()).expect_err("latitude over 90");
        assert!(err.to_string().contains("coordinates out of range"));
    }

    #[test]
    fn read_sites_rejects_index_position_mismatch() {
        let data = format!(
            "{HEADER}\
             1,Berlin,X,1,0,Y,52.5,13.4\n\
             3,Munich,X,1,0,Y,48.1,11.6\n"
        );
        let err = read_sites_from(data.as_bytes()).expect_err("index gap");
        assert!(err.to_string().contains("does not match its position 2"));
    }

    #[test]
    fn read_sites_rejects_an_empty_file() {
        let err = read_sites_from(HEADER.as_bytes()).expect_err("no records");
        assert!(err.to_string().contains("no records"));
    }

    #[test]
    fn read_sites_rejects_short_rows() {
        let data = format!("{HEADER}1,Berlin,X\n");
        assert!(read_sites_from(data.as_bytes()).is_err());
    }
}
