//! Row-aligned table written to one sheet per city.

use super::city::{Subdivision, NO_DATA, NO_METRO};

pub const COLUMN_HEADERS: [&str; 4] = ["Город", "Район", "Округ/Микрорайон", "Метро"];

/// Four parallel columns of equal length: the city name repeated, the
/// districts, the districts of those districts, and the metro stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTable {
    pub city: String,
    pub districts: Vec<String>,
    pub micro_districts: Vec<String>,
    pub metro: Vec<String>,
}

impl CityTable {
    /// Align the subdivision pairs and metro stations of one city.
    ///
    /// Empty inputs are treated as a single sentinel entry, so every table
    /// has at least one row. Shorter columns are right-padded with their
    /// sentinel up to the longest column.
    pub fn build(city: &str, subdivisions: &[Subdivision], metro: &[String]) -> Self {
        let sentinel = [Subdivision::sentinel()];
        let subdivisions = if subdivisions.is_empty() {
            &sentinel[..]
        } else {
            subdivisions
        };

        let (mut districts, mut micro_districts): (Vec<String>, Vec<String>) = subdivisions
            .iter()
            .map(|s| (s.name.clone(), s.district.clone()))
            .unzip();

        let mut metro = if metro.is_empty() {
            vec![NO_METRO.to_string()]
        } else {
            metro.to_vec()
        };

        let max_length = districts.len().max(micro_districts.len()).max(metro.len());
        districts.resize(max_length, NO_DATA.to_string());
        micro_districts.resize(max_length, NO_DATA.to_string());
        metro.resize(max_length, NO_METRO.to_string());

        Self {
            city: city.to_string(),
            districts,
            micro_districts,
            metro,
        }
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Rows in sheet order, each as `[city, district, micro-district, metro]`.
    pub fn rows(&self) -> impl Iterator<Item = [&str; 4]> + '_ {
        self.districts
            .iter()
            .zip(&self.micro_districts)
            .zip(&self.metro)
            .map(move |((district, micro), metro)| {
                [self.city.as_str(), district.as_str(), micro.as_str(), metro.as_str()]
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_city_is_one_sentinel_row() {
        let table = CityTable::build("Тверь", &[], &[]);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows, vec![["Тверь", NO_DATA, NO_DATA, NO_METRO]]);
    }

    #[test]
    fn test_metro_column_longer_pads_districts() {
        let subdivisions = vec![Subdivision::new("Центральный", NO_DATA)];
        let metro = vec![
            "Площадь Ленина".to_string(),
            "Пушкинская".to_string(),
            "Чернышевская".to_string(),
        ];

        let table = CityTable::build("Санкт-Петербург", &subdivisions, &metro);
        assert_eq!(table.len(), 3);
        assert_eq!(table.districts, vec!["Центральный", NO_DATA, NO_DATA]);
        assert_eq!(table.micro_districts, vec![NO_DATA, NO_DATA, NO_DATA]);
        assert_eq!(table.metro, metro);
    }

    #[test]
    fn test_districts_longer_pads_metro() {
        let subdivisions = vec![
            Subdivision::new("Ленинский", "Ботаника"),
            Subdivision::new("Ленинский", "Юго-Западный"),
        ];
        let metro = vec!["Геологическая".to_string()];

        let table = CityTable::build("Екатеринбург", &subdivisions, &metro);
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(
            rows,
            vec![
                ["Екатеринбург", "Ленинский", "Ботаника", "Геологическая"],
                ["Екатеринбург", "Ленинский", "Юго-Западный", NO_METRO],
            ]
        );
    }
}
