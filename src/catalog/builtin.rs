// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The portfolio's own search data.
//!
//! Order is significant (it breaks score ties), so keep pages first, then
//! projects, services, and skills, matching the site navigation.

use crate::types::{Category, Record};

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    url: &'static str,
    tags: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    // Pages
    Entry {
        id: "home",
        title: "Home",
        description: "Data analyst portfolio showcasing expertise in business intelligence and machine learning",
        category: Category::Page,
        url: "/",
        tags: &["portfolio", "data analyst", "home", "overview"],
    },
    Entry {
        id: "about",
        title: "About Me",
        description: "Professional background, experience, and core values in data analytics",
        category: Category::Page,
        url: "/about",
        tags: &["about", "experience", "background", "skills", "education"],
    },
    Entry {
        id: "projects",
        title: "Projects",
        description: "Showcase of Power BI dashboards and Python machine learning projects",
        category: Category::Page,
        url: "/projects",
        tags: &["projects", "portfolio", "power bi", "python", "machine learning"],
    },
    Entry {
        id: "services",
        title: "Services",
        description: "Comprehensive data analytics services with detailed pricing and features",
        category: Category::Page,
        url: "/services",
        tags: &["services", "consulting", "pricing", "business intelligence"],
    },
    Entry {
        id: "resume",
        title: "Resume",
        description: "Professional resume with education, certifications, and achievements",
        category: Category::Page,
        url: "/resume",
        tags: &["resume", "cv", "education", "certifications", "achievements"],
    },
    Entry {
        id: "contact",
        title: "Contact",
        description: "Get in touch for consultations and project inquiries",
        category: Category::Page,
        url: "/contact",
        tags: &["contact", "consultation", "inquiry", "email", "phone"],
    },
    // Projects
    Entry {
        id: "sales-dashboard",
        title: "Sales Performance Dashboard",
        description: "Power BI dashboard tracking KPIs and forecasting trends",
        category: Category::Project,
        url: "/projects#sales-dashboard",
        tags: &["power bi", "dashboard", "sales", "kpi", "forecasting"],
    },
    Entry {
        id: "risk-assessment",
        title: "Financial Risk Assessment",
        description: "Real-time risk monitoring with predictive modeling",
        category: Category::Project,
        url: "/projects#risk-assessment",
        tags: &["finance", "risk", "predictive modeling", "real-time"],
    },
    Entry {
        id: "predictive-maintenance",
        title: "Predictive Maintenance System",
        description: "Machine learning for equipment failure prediction",
        category: Category::Project,
        url: "/projects#predictive-maintenance",
        tags: &["machine learning", "python", "iot", "maintenance", "tensorflow"],
    },
    // Services
    Entry {
        id: "bi-dashboards",
        title: "Business Intelligence & Dashboards",
        description: "Interactive dashboards and real-time data visualization",
        category: Category::Service,
        url: "/services#bi-dashboards",
        tags: &["business intelligence", "dashboards", "power bi", "tableau", "visualization"],
    },
    Entry {
        id: "ml-analytics",
        title: "Machine Learning & Predictive Analytics",
        description: "Advanced algorithms for forecasting and optimization",
        category: Category::Service,
        url: "/services#ml-analytics",
        tags: &["machine learning", "predictive analytics", "python", "algorithms"],
    },
    Entry {
        id: "data-strategy",
        title: "Data Strategy & Consulting",
        description: "Comprehensive data strategies and analytics roadmaps",
        category: Category::Service,
        url: "/services#data-strategy",
        tags: &["strategy", "consulting", "roadmap", "data governance"],
    },
    // Skills
    Entry {
        id: "python-skill",
        title: "Python Programming",
        description: "Advanced Python skills for data analysis and machine learning",
        category: Category::Skill,
        url: "/about#skills",
        tags: &["python", "programming", "pandas", "scikit-learn", "tensorflow"],
    },
    Entry {
        id: "powerbi-skill",
        title: "Power BI",
        description: "Expert-level Power BI development and DAX calculations",
        category: Category::Skill,
        url: "/about#skills",
        tags: &["power bi", "dax", "visualization", "business intelligence"],
    },
    Entry {
        id: "sql-skill",
        title: "SQL & Databases",
        description: "Advanced SQL querying and database management",
        category: Category::Skill,
        url: "/about#skills",
        tags: &["sql", "database", "postgresql", "mysql", "data extraction"],
    },
];

pub(super) fn records() -> Vec<Record> {
    ENTRIES
        .iter()
        .map(|entry| Record {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            category: entry.category,
            url: entry.url.to_string(),
            tags: entry.tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}
