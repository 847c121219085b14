//! Built-in platform catalogue.
//!
//! The demo data set shipped with the binary: learning courses, portfolio
//! applications, marketplace services, lifecycle initiatives and support tickets.

use crate::catalog::HEALTH_GROUP;
use crate::catalog::models::{Category, FilterGroup, HealthBand, Record};

/// Build every built-in category, in tab order.
pub fn categories() -> Vec<Category> {
    vec![
        courses(),
        applications(),
        services(),
        lifecycle(),
        tickets(),
    ]
}

fn courses() -> Category {
    Category::new("courses", "Learning Center")
        .with_search_tags("topics")
        .with_group(FilterGroup::categorical(
            "level",
            "Level",
            &["beginner", "intermediate", "advanced"],
        ))
        .with_group(FilterGroup::categorical(
            "format",
            "Format",
            &["self-paced", "instructor-led", "workshop"],
        ))
        .with_group(FilterGroup::tags(
            "topics",
            "Topics",
            &["strategy", "architecture", "data", "agile", "cloud"],
        ))
        .with_records(vec![
            Record::new(
                "course-dt-fundamentals",
                "Digital Transformation Fundamentals",
                "Core concepts, vocabulary and operating models for leading change across an enterprise.",
            )
            .with_field("level", "beginner")
            .with_field("format", "self-paced")
            .with_tags("topics", &["strategy", "change management"])
            .with_updated(2024, 1, 15),
            Record::new(
                "course-dbp-framework",
                "DBP Capability Framework Deep Dive",
                "Walk through each capability domain of the business platform framework and assess maturity.",
            )
            .with_field("level", "intermediate")
            .with_field("format", "instructor-led")
            .with_tags("topics", &["architecture", "capability mapping"])
            .with_updated(2024, 2, 2),
            Record::new(
                "course-data-governance",
                "Data Governance Essentials",
                "Stewardship roles, quality metrics and policy enforcement for shared data assets.",
            )
            .with_field("level", "beginner")
            .with_field("format", "self-paced")
            .with_tags("topics", &["data", "governance"])
            .with_updated(2023, 11, 20),
            Record::new(
                "course-agile-portfolio",
                "Agile Portfolio Management",
                "Prioritising initiatives with lean portfolio practices and value streams.",
            )
            .with_field("level", "intermediate")
            .with_field("format", "workshop")
            .with_tags("topics", &["agile", "portfolio"])
            .with_updated(2024, 3, 8),
            Record::new(
                "course-ea-patterns",
                "Enterprise Architecture Patterns",
                "Reference architectures for integration, APIs and event-driven systems.",
            )
            .with_field("level", "advanced")
            .with_field("format", "instructor-led")
            .with_tags("topics", &["architecture", "integration"])
            .with_updated(2023, 9, 30),
            Record::new(
                "course-cloud-migration",
                "Cloud Migration Playbook",
                "Assess, plan and execute workload moves to managed cloud platforms.",
            )
            .with_field("level", "advanced")
            .with_field("format", "workshop")
            .with_tags("topics", &["cloud", "infrastructure"])
            .with_updated(2024, 4, 21),
        ])
}

fn application(
    id: &str,
    title: &str,
    description: &str,
    score: u8,
    status: &str,
    technologies: &[&str],
) -> Record {
    Record::new(id, title, description)
        .with_score(score)
        .with_field(HEALTH_GROUP, HealthBand::from_score(score).as_str())
        .with_field("status", status)
        .with_tags("technologies", technologies)
}

fn applications() -> Category {
    Category::new("applications", "Portfolio Health")
        .with_search_tags("technologies")
        .with_group(FilterGroup::categorical(
            HEALTH_GROUP,
            "Health",
            &["healthy", "at-risk", "critical"],
        ))
        .with_group(FilterGroup::categorical(
            "status",
            "Status",
            &["active", "sunsetting", "retired"],
        ))
        .with_group(FilterGroup::tags(
            "technologies",
            "Technologies",
            &["Java", "SAP", "React", "COBOL", "PostgreSQL"],
        ))
        .with_records(vec![
            application(
                "app-crm",
                "Customer Relationship Hub",
                "Unified view of accounts, opportunities and service cases.",
                95,
                "active",
                &["Salesforce", "REST"],
            ),
            application(
                "app-erp",
                "Finance ERP",
                "General ledger, payables and receivables for all business units.",
                65,
                "active",
                &["SAP", "Oracle"],
            ),
            application(
                "app-legacy-billing",
                "Legacy Billing System",
                "Mainframe invoicing engine scheduled for replacement.",
                30,
                "sunsetting",
                &["COBOL", "DB2"],
            ),
            application(
                "app-hr-portal",
                "HR Self-Service Portal",
                "Leave requests, payslips and onboarding checklists for employees.",
                80,
                "active",
                &["React", "Node.js"],
            ),
            application(
                "app-warehouse",
                "Warehouse Management",
                "Inventory tracking and pick-path optimisation across sites.",
                45,
                "active",
                &["Java", "PostgreSQL"],
            ),
        ])
}

fn services() -> Category {
    Category::new("services", "Marketplace")
        .with_search_tags("capabilities")
        .with_group(FilterGroup::categorical(
            "category",
            "Category",
            &["consulting", "platform", "analytics", "security"],
        ))
        .with_group(FilterGroup::categorical(
            "complexity",
            "Complexity",
            &["low", "medium", "high"],
        ))
        .with_group(FilterGroup::tags(
            "capabilities",
            "Capabilities",
            &["assessment", "automation", "reporting", "identity"],
        ))
        .with_records(vec![
            Record::new(
                "svc-maturity-assessment",
                "Maturity Assessment",
                "Structured review of current capabilities with a prioritised roadmap.",
            )
            .with_field("category", "consulting")
            .with_field("complexity", "low")
            .with_tags("capabilities", &["assessment", "roadmapping"]),
            Record::new(
                "svc-process-automation",
                "Process Automation Suite",
                "Low-code workflow builder with connectors for core business systems.",
            )
            .with_field("category", "platform")
            .with_field("complexity", "medium")
            .with_tags("capabilities", &["automation", "workflow"]),
            Record::new(
                "svc-insights",
                "Executive Insights Dashboards",
                "Curated KPI dashboards fed from the enterprise data lake.",
            )
            .with_field("category", "analytics")
            .with_field("complexity", "medium")
            .with_tags("capabilities", &["reporting", "data visualisation"]),
            Record::new(
                "svc-zero-trust",
                "Zero Trust Access",
                "Identity-aware access control for internal and partner applications.",
            )
            .with_field("category", "security")
            .with_field("complexity", "high")
            .with_tags("capabilities", &["identity", "access management"]),
            Record::new(
                "svc-integration-hub",
                "Integration Hub",
                "Managed API gateway and event bus for connecting platform services.",
            )
            .with_field("category", "platform")
            .with_field("complexity", "high")
            .with_tags("capabilities", &["automation", "api management"]),
        ])
}

fn lifecycle() -> Category {
    Category::new("lifecycle", "Lifecycle")
        .with_group(FilterGroup::categorical(
            "stage",
            "Stage",
            &["ideation", "planning", "execution", "review", "closed"],
        ))
        .with_group(FilterGroup::categorical(
            "priority",
            "Priority",
            &["low", "medium", "high"],
        ))
        .with_records(vec![
            Record::new(
                "init-customer-portal",
                "Customer Portal Refresh",
                "Redesign of the self-service portal around customer journeys.",
            )
            .with_field("stage", "execution")
            .with_field("priority", "high")
            .with_score(72),
            Record::new(
                "init-data-platform",
                "Enterprise Data Platform",
                "Consolidate reporting warehouses into a governed lakehouse.",
            )
            .with_field("stage", "planning")
            .with_field("priority", "high")
            .with_score(40),
            Record::new(
                "init-robotic-claims",
                "Robotic Claims Processing",
                "Automate first-pass validation of insurance claims.",
            )
            .with_field("stage", "review")
            .with_field("priority", "medium")
            .with_score(88),
            Record::new(
                "init-green-it",
                "Green IT Programme",
                "Measure and reduce the energy footprint of data centres.",
            )
            .with_field("stage", "ideation")
            .with_field("priority", "low")
            .with_score(15),
            Record::new(
                "init-erp-upgrade",
                "ERP Upgrade Wave 1",
                "Move finance modules to the current ERP release.",
            )
            .with_field("stage", "closed")
            .with_field("priority", "medium")
            .with_score(100),
        ])
}

fn tickets() -> Category {
    Category::new("tickets", "Support")
        .with_search_tags("topics")
        .with_group(FilterGroup::categorical(
            "status",
            "Status",
            &["open", "in-progress", "resolved", "closed"],
        ))
        .with_group(FilterGroup::categorical(
            "priority",
            "Priority",
            &["low", "medium", "high", "critical"],
        ))
        .with_records(vec![
            Record::new(
                "TCK-1001",
                "Cannot access learning portal",
                "Single sign-on loops back to the login page after authentication.",
            )
            .with_field("status", "open")
            .with_field("priority", "high")
            .with_tags("topics", &["sso", "access"])
            .with_updated(2024, 5, 2),
            Record::new(
                "TCK-1002",
                "Dashboard shows stale data",
                "Portfolio health scores have not refreshed since the weekend.",
            )
            .with_field("status", "in-progress")
            .with_field("priority", "medium")
            .with_tags("topics", &["reporting", "data sync"])
            .with_updated(2024, 5, 6),
            Record::new(
                "TCK-1003",
                "Request new marketplace listing",
                "Publish the vendor risk service to the internal marketplace.",
            )
            .with_field("status", "resolved")
            .with_field("priority", "low")
            .with_tags("topics", &["marketplace"])
            .with_updated(2024, 4, 18),
            Record::new(
                "TCK-1004",
                "Payment integration outage",
                "Invoices fail to post to the finance ERP with timeout errors.",
            )
            .with_field("status", "open")
            .with_field("priority", "critical")
            .with_tags("topics", &["integration", "erp"])
            .with_updated(2024, 5, 7),
            Record::new(
                "TCK-1005",
                "Certificate not issued",
                "Completed course does not show a certificate in the learner profile.",
            )
            .with_field("status", "closed")
            .with_field("priority", "low")
            .with_tags("topics", &["learning", "certificates"])
            .with_updated(2024, 3, 29),
            Record::new(
                "TCK-1006",
                "Access review export fails",
                "CSV export of quarterly access reviews returns an empty file.",
            )
            .with_field("status", "in-progress")
            .with_field("priority", "high")
            .with_tags("topics", &["access", "reporting"])
            .with_updated(2024, 5, 3),
        ])
}
