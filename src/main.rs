// Workforce demo - walks the whole library and prints each step

use anyhow::Result;

use workforce::{reports, CompanyRegistry, Fifo, Job, Person};

fn main() -> Result<()> {
    println!("👥 Workforce Domain Model Demo (v{})", workforce::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    persons_and_money()?;
    companies_and_payroll();
    jobs_and_webshops();
    queues();
    orderings_and_reports();

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Demo complete");
    Ok(())
}

fn persons_and_money() -> Result<()> {
    println!("\n👤 Persons and money");

    let mut person = Person::new("Mathias", "Grønne", 29);
    print!("{person}");

    person.spend_money(49.0);
    println!("After spending 49: {}", person.balance());

    // Negative amounts are ignored
    person.spend_money(-100_000.0);
    println!("After 'spending' -100000: {}", person.balance());

    person.give_salary(45_000.0);
    println!("After a salary payment: {}", person.balance());

    // Entities serialize; dump a snapshot
    println!("Snapshot:\n{}", serde_json::to_string_pretty(&person)?);
    Ok(())
}

fn companies_and_payroll() {
    println!("\n🏢 Companies and payroll");

    let mut registry = CompanyRegistry::new();
    println!("Nr. of companies: {}", registry.total_created());

    let mut company_a = registry.create("Nice Company Aps", Some(45_000.0));
    let company_b = registry.create("Nice Company Aps", Some(25_000.0));
    println!("Nr. of companies: {}", registry.total_created());
    println!("Company A Id: {}", company_a.id);
    println!("Company B Id: {}", company_b.id);

    company_a.hire(Person::new("Mathias", "Grønne", 29));
    company_a.hire(Person::new("Tobias", "Nielsen", 35));
    company_a.pay_salary();

    print!("{company_a}");
    for person in company_a.employees() {
        println!("  {} has {}", person.full_name(), person.balance());
    }
}

fn jobs_and_webshops() {
    println!("\n💼 Jobs and webshop companies");

    let ceo = Job::Ceo;
    println!("{} earns {}: {}", ceo, ceo.salary(), ceo.do_work());
    println!(
        "{} earns {}: {}",
        Job::Programmer,
        Job::Programmer.salary(),
        Job::Programmer.do_work()
    );

    let mut registry = CompanyRegistry::new();
    let mut webshop = registry.create_webshop(
        "webshop",
        None,
        vec!["Pant".to_string(), "Shirt".to_string()],
    );

    webshop.hire_as(Person::new("Mathias", "Grønne", 29), Job::Programmer);
    webshop.hire_as(Person::new("Tobias", "Nielsen", 35), Job::Ceo);
    webshop.pay_salary();

    print!("{webshop}");
    for person in webshop.employees() {
        println!(
            "  {} ({}) has {}",
            person.full_name(),
            person.job(),
            person.balance()
        );
    }
}

fn queues() {
    println!("\n🎢 Queue in Tivoli");

    let mut queue = Fifo::new();
    println!("Persons in queue: {}", queue.len());

    queue.push(Person::new("Mathias", "Grønne", 29));
    queue.push(Person::new("Tobias", "Nielsen", 35));
    println!("Persons in queue: {}", queue.len());

    while let Some(person) = queue.pop() {
        println!("Next up: {}", person.full_name());
    }
    match queue.pop() {
        Some(person) => println!("Next up: {}", person.full_name()),
        None => println!("Queue is empty"),
    }
}

fn orderings_and_reports() {
    println!("\n📊 Orderings and reports");

    let mut persons = vec![
        Person::new("Mathias", "Grønne", 29),
        Person::new("Tobias", "Nielsen", 35),
        Person::new("Rasmus", "Pedersen", 24),
        Person::new("Frank", "Olesen", 32),
    ];
    persons[0].give_salary(6_700.0);
    persons[1].give_salary(18_000.0);
    persons[2].give_salary(36_000.0);
    persons[3].give_salary(45_000.0);
    persons[0].set_job(Job::Ceo);
    persons[1].set_job(Job::Programmer);

    println!("By age:");
    for person in reports::sorted_by_age(&persons) {
        println!("  {} ({})", person.full_name(), person.age);
    }

    println!("By balance:");
    for person in reports::sorted_by_balance(&persons) {
        println!("  {} ({})", person.full_name(), person.balance());
    }

    if let Some(person) = reports::oldest(&persons) {
        println!("Oldest: {}", person.full_name());
    }
    if let Some(person) = reports::top_earner(&persons) {
        println!("Top earner: {} as {}", person.full_name(), person.job());
    }

    let over_30 = reports::name_to_age_where(&persons, |person| person.age > 30);
    println!("Over 30: {over_30:?}");

    let mut registry = CompanyRegistry::new();
    let webshops = vec![
        registry.create_webshop("Company A", None, vec!["Pant".into(), "Shirt".into()]),
        registry.create_webshop("Company B", None, vec!["Dog".into(), "Cat".into()]),
        registry.create_webshop("Company C", None, vec![]),
    ];
    println!("All products: {:?}", reports::all_products(&webshops));
    println!(
        "Stocked webshops: {:?}",
        reports::stocked_webshops(&webshops)
            .iter()
            .map(|webshop| webshop.name())
            .collect::<Vec<_>>()
    );
}
