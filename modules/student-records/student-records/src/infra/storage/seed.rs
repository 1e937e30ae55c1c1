//! Demo records loaded into the store at startup.

use student_records_sdk::Student;

// (id, name, age, course, email, semester, enrollment year, fees paid)
type SeedRow = (&'static str, &'static str, u32, &'static str, &'static str, u8, i32, bool);

const DEMO_ROWS: &[SeedRow] = &[
    ("1", "Aarav Sharma", 20, "B.Tech CSE", "aarav.sharma@vit.ac.in", 4, 2024, true),
    ("2", "Priya Patel", 21, "B.Tech ECE", "priya.patel@srmist.edu.in", 5, 2023, false),
    ("3", "Rohan Mehta", 22, "B.Sc Mathematics", "rohan.mehta@du.ac.in", 6, 2023, true),
    ("4", "Ananya Krishnan", 19, "BBA", "ananya.k@christuniversity.in", 2, 2025, true),
    ("5", "Vikram Singh", 23, "M.Tech AI & ML", "vikram.singh@iitb.ac.in", 3, 2024, false),
    ("6", "Sneha Reddy", 20, "B.Tech IT", "sneha.reddy@bits-pilani.ac.in", 4, 2024, true),
    ("7", "Arjun Nair", 21, "B.Com Honours", "arjun.nair@srcc.du.ac.in", 5, 2023, true),
    ("8", "Kavya Iyer", 22, "M.Sc Data Science", "kavya.iyer@iitm.ac.in", 3, 2024, false),
    ("9", "Rahul Gupta", 20, "B.Tech Mechanical", "rahul.gupta@nitk.edu.in", 4, 2024, true),
    ("10", "Diya Banerjee", 19, "BA English", "diya.b@presiuniv.ac.in", 2, 2025, false),
    ("11", "Karthik Rajan", 23, "B.Tech CSE", "karthik.r@iiitd.ac.in", 7, 2022, true),
    ("12", "Ishita Verma", 21, "B.Sc Physics", "ishita.v@bhu.ac.in", 5, 2023, true),
    ("13", "Aditya Joshi", 22, "B.Tech Civil", "aditya.j@coep.ac.in", 6, 2023, false),
    ("14", "Meera Desai", 20, "BCA", "meera.d@symbiosis.ac.in", 4, 2024, true),
    ("15", "Siddharth Kumar", 24, "MBA Finance", "sid.kumar@iima.ac.in", 3, 2024, true),
    ("16", "Tanvi Choudhary", 19, "B.Des Communication", "tanvi.c@nid.edu", 2, 2025, false),
    ("17", "Nikhil Thomas", 21, "B.Tech EEE", "nikhil.t@manipal.edu", 5, 2023, true),
    ("18", "Pooja Saxena", 22, "M.A Economics", "pooja.s@jnu.ac.in", 3, 2024, false),
    ("19", "Harsh Agarwal", 20, "B.Tech CSE", "harsh.a@lnmiit.ac.in", 4, 2024, true),
    ("20", "Riya Chatterjee", 21, "B.Sc Chemistry", "riya.c@jadavpuruniv.in", 5, 2023, true),
];

/// The twenty demo students, ids `"1"` to `"20"`.
#[must_use]
pub fn demo_students() -> Vec<Student> {
    DEMO_ROWS
        .iter()
        .map(
            |&(id, name, age, course, email, semester, enrollment_year, fees_paid)| Student {
                id: id.to_owned(),
                name: name.to_owned(),
                age,
                course: course.to_owned(),
                email: email.to_owned(),
                semester,
                enrollment_year,
                fees_paid,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_students_have_unique_ids() {
        let students = demo_students();
        assert_eq!(students.len(), 20);
        let ids: HashSet<_> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), students.len());
    }

    #[test]
    fn test_demo_students_satisfy_model_constraints() {
        for s in demo_students() {
            assert!(s.age > 0, "{}", s.id);
            assert!((1..=10).contains(&s.semester), "{}", s.id);
            assert!(!s.name.is_empty() && !s.course.is_empty() && !s.email.is_empty());
        }
    }
}
