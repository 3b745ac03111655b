use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registrar::Role;
use registrar::config::Config;
use registrar::models::secure_record::{RecordField, SecureStudentRecord};
use registrar::models::student::{ClassYear, Student, StudentLevel};
use registrar::seed;
use registrar::services::enrollment_service;

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registrar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let demo = seed::seed_demo_data(&config).expect("Failed to seed demo data");
    let mut system = demo.system;

    println!("== Registration flow ==");

    // Foundation courses first.
    for course in ["CS101", "MATH101"] {
        match system.register_course(&demo.cs_student, course) {
            Ok(()) => println!("Alex -> {}: registered", course),
            Err(e) => println!("Alex -> {}: {}", course, e),
        }
    }

    // A prerequisite violation is recoverable; show it and move on.
    if let Err(e) = system.register_course(&demo.cs_student, "CS301") {
        println!("Alex -> CS301: {}", e);
    }

    // Complete the foundations, then the second tier opens up.
    system
        .add_grade(&demo.cs_student, "CS101", 3.6)
        .expect("grade");
    system
        .add_grade(&demo.cs_student, "MATH101", 3.8)
        .expect("grade");
    system.drop_course(&demo.cs_student, "CS101").expect("drop");
    system
        .drop_course(&demo.cs_student, "MATH101")
        .expect("drop");
    for course in ["CS201", "MATH201"] {
        match system.register_course(&demo.cs_student, course) {
            Ok(()) => println!("Alex -> {}: registered", course),
            Err(e) => println!("Alex -> {}: {}", course, e),
        }
    }

    // Cross-department registration for the math student.
    system
        .register_course(&demo.math_student, "MATH101")
        .expect("register");
    match system.register_course(&demo.math_student, "CS101") {
        Ok(()) => println!("Maria -> CS101: registered (cross-department)"),
        Err(e) => println!("Maria -> CS101: {}", e),
    }

    // The PhD student brings completed foundations with her.
    system
        .add_grade(&demo.grad_student, "CS101", 4.0)
        .expect("grade");
    system
        .add_grade(&demo.grad_student, "CS201", 3.9)
        .expect("grade");
    system
        .add_grade(&demo.grad_student, "MATH201", 3.7)
        .expect("grade");
    match system.register_course(&demo.grad_student, "CS301") {
        Ok(()) => println!("Carol -> CS301: registered"),
        Err(e) => println!("Carol -> CS301: {}", e),
    }

    if let Some(student) = system.student(&demo.cs_student) {
        println!(
            "\nAlex: GPA {:.2}, status {}",
            enrollment_service::calculate_gpa(student),
            enrollment_service::academic_status(student)
        );
    }

    println!("\n== Roles ==");
    if let Some(faculty) = system.faculty_member(&demo.cs_professor) {
        println!("{}: {}", faculty.person.name(), faculty.role());
        for duty in faculty.responsibilities().iter().take(2) {
            println!("  - {}", duty);
        }
    }
    if let Some(student) = system.student(&demo.grad_student) {
        println!("{}: {}", student.person.name(), student.role());
    }

    println!("\n== Secure record ==");
    let john = Student::new(
        "John Doe",
        "john.doe@student.edu",
        "555-0201",
        "MATH",
        StudentLevel::Undergraduate {
            class_year: ClassYear::Junior,
        },
    )
    .expect("student");
    let mut record = SecureStudentRecord::new(john);
    println!("name: {}", record.access(RecordField::Name));
    record.lock();
    match record.update(RecordField::Name, "Jane Doe") {
        Ok(()) => println!("update while locked: applied"),
        Err(e) => println!("update while locked: {}", e),
    }
    record.unlock();
    record
        .update(RecordField::Name, "Jane Doe")
        .expect("update after unlock");
    println!("name after unlock: {}", record.access(RecordField::Name));
    println!("access log entries: {}", record.access_log().len());

    println!("\n== Transcript ==");
    let transcript = system.transcript(&demo.cs_student).expect("transcript");
    println!(
        "{}",
        serde_json::to_string_pretty(&transcript).expect("serialize transcript")
    );

    println!("\n== CS department statistics ==");
    let stats = system.get_statistics("CS").expect("statistics");
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).expect("serialize statistics")
    );

    println!("\n== CS course schedule ==");
    for entry in system.course_schedule("CS").expect("schedule") {
        println!(
            "{:<8} {:<24} {:<18} enrolled {:>2}, available {:>2}",
            entry.code, entry.name, entry.instructor, entry.enrolled, entry.available
        );
    }

    println!("\n== CS faculty workload ==");
    for entry in system.faculty_workload_report("CS").expect("workload") {
        println!(
            "{:<20} {:<22} courses {}, workload {:.1}",
            entry.name, entry.role, entry.courses, entry.workload
        );
    }

    println!("\n== System report ==");
    let report = system.system_report();
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("serialize report")
    );
}
