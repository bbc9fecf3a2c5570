// 📊 Reports - orderings, selections, and summary maps over rosters
//
// Free functions over person and webshop slices. Sorting helpers
// return fresh vectors and leave their input untouched; selection
// helpers borrow.

use std::collections::HashMap;

use crate::entities::{Person, WebshopCompany};

/// Sort persons by the default ordering: age ascending
pub fn sorted_by_age(persons: &[Person]) -> Vec<Person> {
    let mut sorted = persons.to_vec();
    sorted.sort();
    sorted
}

/// Sort persons alphabetically by full name
pub fn sorted_by_name(persons: &[Person]) -> Vec<Person> {
    let mut sorted = persons.to_vec();
    sorted.sort_by_key(|person| person.full_name());
    sorted
}

/// Sort persons by bank balance, poorest first
pub fn sorted_by_balance(persons: &[Person]) -> Vec<Person> {
    let mut sorted = persons.to_vec();
    sorted.sort_by(|a, b| a.balance().total_cmp(&b.balance()));
    sorted
}

pub fn oldest(persons: &[Person]) -> Option<&Person> {
    persons.iter().max_by_key(|person| person.age)
}

pub fn youngest(persons: &[Person]) -> Option<&Person> {
    persons.iter().min_by_key(|person| person.age)
}

/// The person whose job carries the highest salary figure
pub fn top_earner(persons: &[Person]) -> Option<&Person> {
    persons
        .iter()
        .max_by(|a, b| a.job().salary().total_cmp(&b.job().salary()))
}

/// Map every person's full name to their age
pub fn name_to_age(persons: &[Person]) -> HashMap<String, u32> {
    persons
        .iter()
        .map(|person| (person.full_name(), person.age))
        .collect()
}

/// Map full name to age for the persons matching the predicate
pub fn name_to_age_where<F>(persons: &[Person], predicate: F) -> HashMap<String, u32>
where
    F: Fn(&Person) -> bool,
{
    persons
        .iter()
        .filter(|person| predicate(person))
        .map(|person| (person.full_name(), person.age))
        .collect()
}

/// Webshops that actually have something on the shelves
pub fn stocked_webshops(webshops: &[WebshopCompany]) -> Vec<&WebshopCompany> {
    webshops
        .iter()
        .filter(|webshop| !webshop.products().is_empty())
        .collect()
}

/// Every product across all webshops, flattened in webshop order
pub fn all_products(webshops: &[WebshopCompany]) -> Vec<String> {
    webshops
        .iter()
        .flat_map(|webshop| webshop.products().iter().cloned())
        .collect()
}

/// Products of webshops that have at least one employee
pub fn staffed_products(webshops: &[WebshopCompany]) -> Vec<String> {
    webshops
        .iter()
        .filter(|webshop| !webshop.is_empty())
        .flat_map(|webshop| webshop.products().iter().cloned())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CompanyRegistry, Job};

    fn sample_persons() -> Vec<Person> {
        vec![
            Person::new("Mathias", "Grønne", 29),
            Person::new("Tobias", "Nielsen", 35),
            Person::new("Rasmus", "Pedersen", 24),
            Person::new("Frank", "Olesen", 32),
        ]
    }

    #[test]
    fn test_default_sort_is_age_ascending() {
        let sorted = sorted_by_age(&sample_persons());
        let ages: Vec<u32> = sorted.iter().map(|person| person.age).collect();
        assert_eq!(ages, vec![24, 29, 32, 35]);
    }

    #[test]
    fn test_sort_by_name() {
        let sorted = sorted_by_name(&sample_persons());
        let first_names: Vec<&str> = sorted
            .iter()
            .map(|person| person.first_name.as_str())
            .collect();
        assert_eq!(first_names, vec!["Frank", "Mathias", "Rasmus", "Tobias"]);
    }

    #[test]
    fn test_sort_by_balance() {
        let mut persons = sample_persons();
        persons[0].give_salary(6_700.0);
        persons[1].give_salary(18_000.0);
        persons[2].give_salary(36_000.0);
        persons[3].give_salary(45_000.0);

        let sorted = sorted_by_balance(&persons);
        let balances: Vec<f64> = sorted.iter().map(|person| person.balance()).collect();
        assert_eq!(balances, vec![6_700.0, 18_000.0, 36_000.0, 45_000.0]);
    }

    #[test]
    fn test_oldest_and_youngest() {
        let persons = sample_persons();

        assert_eq!(oldest(&persons).unwrap().full_name(), "Tobias Nielsen");
        assert_eq!(youngest(&persons).unwrap().full_name(), "Rasmus Pedersen");
        assert!(oldest(&[]).is_none());
        assert!(youngest(&[]).is_none());
    }

    #[test]
    fn test_top_earner_uses_job_figures() {
        let mut persons = sample_persons();
        persons[0].set_job(Job::Programmer);
        persons[1].set_job(Job::Ceo);

        assert_eq!(top_earner(&persons).unwrap().full_name(), "Tobias Nielsen");
    }

    #[test]
    fn test_name_to_age_maps_every_person() {
        let persons = sample_persons();
        let map = name_to_age(&persons);

        assert_eq!(map.len(), 4);
        assert_eq!(map.get("Mathias Grønne"), Some(&29));
        assert_eq!(map.get("Frank Olesen"), Some(&32));
    }

    #[test]
    fn test_name_to_age_with_age_filter() {
        let persons = sample_persons();
        let over_30 = name_to_age_where(&persons, |person| person.age > 30);

        assert_eq!(over_30.len(), 2);
        assert!(over_30.contains_key("Tobias Nielsen"));
        assert!(over_30.contains_key("Frank Olesen"));
    }

    #[test]
    fn test_name_to_age_with_allow_list_filter() {
        let persons = sample_persons();
        let allowed = ["Mathias", "Tobias"];
        let map = name_to_age_where(&persons, |person| {
            allowed.contains(&person.first_name.as_str())
        });

        assert_eq!(map.len(), 2);
        assert!(map.contains_key("Mathias Grønne"));
        assert!(map.contains_key("Tobias Nielsen"));
    }

    #[test]
    fn test_name_to_age_with_job_filter() {
        let mut persons = sample_persons();
        persons[0].set_job(Job::Ceo);
        persons[1].set_job(Job::Programmer);
        persons[2].set_job(Job::Programmer);

        let programmers = name_to_age_where(&persons, |person| person.job() == Job::Programmer);
        assert_eq!(programmers.len(), 2);

        let unemployed = name_to_age_where(&persons, |person| person.job() == Job::Unemployed);
        assert_eq!(unemployed.len(), 1);
        assert!(unemployed.contains_key("Frank Olesen"));
    }

    #[test]
    fn test_webshop_aggregations() {
        let mut registry = CompanyRegistry::new();
        let mut webshop_a = registry.create_webshop(
            "Company A",
            None,
            vec!["Pant".to_string(), "Shirt".to_string()],
        );
        let webshop_b = registry.create_webshop(
            "Company B",
            None,
            vec!["Dog".to_string(), "Cat".to_string()],
        );
        let webshop_c = registry.create_webshop("Company C", None, vec![]);

        webshop_a.hire_as(Person::new("Mathias", "Grønne", 29), Job::Ceo);

        let webshops = vec![webshop_a, webshop_b, webshop_c];

        let stocked = stocked_webshops(&webshops);
        assert_eq!(stocked.len(), 2);
        assert_eq!(stocked[0].name(), "Company A");

        assert_eq!(all_products(&webshops), vec!["Pant", "Shirt", "Dog", "Cat"]);

        // Only Company A has staff
        assert_eq!(staffed_products(&webshops), vec!["Pant", "Shirt"]);
    }
}
