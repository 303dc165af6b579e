//! Static sample data standing in for computed results.

use crate::models::matching::{AdminUser, CandidateResume, MatchResult, PlatformStats, UsagePoint};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_match_results() -> Vec<MatchResult> {
    vec![
        MatchResult {
            id: "1".to_string(),
            job_title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            match_score: 85,
            matched_skills: strings(&["React", "TypeScript", "Tailwind CSS", "REST APIs", "Git"]),
            missing_skills: strings(&["GraphQL", "AWS", "Docker"]),
            suggestions: strings(&[
                "Add experience with GraphQL - consider building a side project using Apollo Client.",
                "Mention any cloud deployment experience, even personal projects.",
                "Consider getting AWS Cloud Practitioner certification.",
            ]),
            date: "2026-02-05".to_string(),
        },
        MatchResult {
            id: "2".to_string(),
            job_title: "Full Stack Engineer".to_string(),
            company: "StartupXYZ".to_string(),
            match_score: 72,
            matched_skills: strings(&["JavaScript", "Node.js", "React", "MongoDB"]),
            missing_skills: strings(&["Python", "Kubernetes", "CI/CD", "PostgreSQL"]),
            suggestions: strings(&[
                "Highlight any backend API development experience more prominently.",
                "Add Python to your skillset - free courses available on Coursera.",
                "Document any CI/CD pipeline experience in your projects section.",
            ]),
            date: "2026-02-03".to_string(),
        },
        MatchResult {
            id: "3".to_string(),
            job_title: "UI/UX Developer".to_string(),
            company: "DesignHub".to_string(),
            match_score: 91,
            matched_skills: strings(&[
                "React",
                "CSS",
                "Figma",
                "Responsive Design",
                "Accessibility",
                "JavaScript",
            ]),
            missing_skills: strings(&["Vue.js"]),
            suggestions: strings(&[
                "Your profile is an excellent match! Consider adding Vue.js for broader reach.",
                "Emphasize your accessibility expertise - it's increasingly in demand.",
            ]),
            date: "2026-02-01".to_string(),
        },
    ]
}

pub fn sample_candidates() -> Vec<CandidateResume> {
    vec![
        CandidateResume {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@email.com".to_string(),
            match_score: 92,
            skills: strings(&["React", "TypeScript", "Node.js", "AWS", "Docker"]),
            experience: "4 years".to_string(),
            upload_date: "2026-02-06".to_string(),
        },
        CandidateResume {
            id: "2".to_string(),
            name: "Rahul Mehta".to_string(),
            email: "rahul.m@email.com".to_string(),
            match_score: 87,
            skills: strings(&["Python", "React", "PostgreSQL", "REST APIs"]),
            experience: "3 years".to_string(),
            upload_date: "2026-02-05".to_string(),
        },
        CandidateResume {
            id: "3".to_string(),
            name: "Ananya Gupta".to_string(),
            email: "ananya.g@email.com".to_string(),
            match_score: 78,
            skills: strings(&["JavaScript", "Vue.js", "CSS", "MongoDB"]),
            experience: "2 years".to_string(),
            upload_date: "2026-02-05".to_string(),
        },
        CandidateResume {
            id: "4".to_string(),
            name: "Vikram Singh".to_string(),
            email: "vikram.s@email.com".to_string(),
            match_score: 74,
            skills: strings(&["Java", "Spring Boot", "React", "MySQL"]),
            experience: "5 years".to_string(),
            upload_date: "2026-02-04".to_string(),
        },
        CandidateResume {
            id: "5".to_string(),
            name: "Neha Patel".to_string(),
            email: "neha.p@email.com".to_string(),
            match_score: 65,
            skills: strings(&["HTML", "CSS", "JavaScript", "Bootstrap"]),
            experience: "1 year".to_string(),
            upload_date: "2026-02-04".to_string(),
        },
    ]
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        total_matches: 1247,
        avg_score: 76.3,
        total_users: 384,
        resumes_processed: 2103,
        total_job_descriptions: 156,
    }
}

pub fn usage_data() -> Vec<UsagePoint> {
    [
        ("Sep", 120, 45),
        ("Oct", 180, 62),
        ("Nov", 240, 89),
        ("Dec", 310, 124),
        ("Jan", 390, 168),
        ("Feb", 420, 195),
    ]
    .into_iter()
    .map(|(month, matches, users)| UsagePoint {
        month: month.to_string(),
        matches,
        users,
    })
    .collect()
}

pub fn admin_users() -> Vec<AdminUser> {
    [
        ("1", "Priya Sharma", "priya@email.com", "Candidate", "Active", "2026-02-06"),
        ("2", "Rahul Mehta", "rahul@email.com", "Candidate", "Active", "2026-02-05"),
        ("3", "HR Manager", "hr@techcorp.com", "Recruiter", "Active", "2026-02-06"),
        ("4", "Ananya Gupta", "ananya@email.com", "Candidate", "Inactive", "2026-01-20"),
        ("5", "Recruiter Team", "recruit@startup.com", "Recruiter", "Active", "2026-02-04"),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, last_login)| AdminUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: status.to_string(),
        last_login: last_login.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_result_values() {
        let results = sample_match_results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].job_title, "Senior Frontend Developer");
        assert_eq!(results[0].match_score, 85);
    }

    #[test]
    fn test_stats_headline_numbers() {
        let stats = platform_stats();
        assert_eq!(stats.total_matches, 1247);
        assert_eq!(stats.total_users, 384);
    }

    #[test]
    fn test_candidates_ranked_by_score() {
        let candidates = sample_candidates();
        assert!(candidates
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }
}
