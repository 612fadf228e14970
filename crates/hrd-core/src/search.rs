use hrd_model::Employee;

use crate::directory::GeoDirectory;

/// One global-search result.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    pub employee: &'a Employee,
    /// Result title, the employee's last name.
    pub title: &'a str,
    /// Name of the employee's country, when the reference resolves.
    pub country: Option<&'a str>,
}

/// Case-insensitive substring search over the globally searchable employee
/// attributes: first, middle and last name, plus the name of the country the
/// employee belongs to. Blank queries match nothing.
pub fn search_employees<'a, D: GeoDirectory + ?Sized>(
    employees: &'a [Employee],
    directory: &'a D,
    query: &str,
) -> Vec<SearchHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    employees
        .iter()
        .filter_map(|employee| {
            let country = directory
                .country(employee.country_id)
                .map(|country| country.name.as_str());
            let matched = [
                employee.first_name.as_str(),
                employee.middle_name.as_str(),
                employee.last_name.as_str(),
                country.unwrap_or(""),
            ]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle));
            matched.then(|| SearchHit {
                employee,
                title: employee.search_title(),
                country,
            })
        })
        .collect()
}
