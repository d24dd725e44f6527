//! Per-kind configuration of the generic resource manager.
//!
//! A [`Resource`] is any record the gateway can list and delete. An
//! [`Editable`] resource additionally describes its form: the field schema,
//! how a record fills the form for editing, and how the form becomes the
//! create/update payload.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints::ResourceKind;
use crate::form::{FieldKind, FieldSpec, FormError, FormState, number_text};
use crate::types::*;

pub trait Resource: Clone + Debug + PartialEq + DeserializeOwned + Identified + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Human label for confirmations and CLI output.
    fn title(&self) -> String;
}

pub trait Editable: Resource {
    type Draft: Serialize + Debug + Clone + PartialEq + Send + Sync + 'static;

    fn fields() -> &'static [FieldSpec];

    /// Form contents for editing this record.
    fn to_form(&self) -> FormState;

    /// Convert submitted form text into the request payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when a required field is blank or a number does not parse.
    fn to_draft(form: &FormState) -> Result<Self::Draft, FormError>;

    /// Empty create form. Checkboxes start unchecked unless overridden.
    fn blank_form() -> FormState {
        let mut form = FormState::new();
        for field in Self::fields() {
            if field.kind == FieldKind::Checkbox {
                form.set_flag(field.key, false);
            } else {
                form.set(field.key, "");
            }
        }
        form
    }

    /// Table cells for the schema's column fields.
    fn cells(&self) -> Vec<String> {
        let form = self.to_form();
        Self::fields().iter().filter(|field| field.column).map(|field| form.text(field.key)).collect()
    }
}

/// Column headings matching [`Editable::cells`].
#[must_use]
pub fn headings<R: Editable>() -> Vec<&'static str> {
    R::fields().iter().filter(|field| field.column).map(|field| field.label).collect()
}

fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn flag_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// =============================================================================
// WEBSITE CONTENT
// =============================================================================

impl Resource for Service {
    const KIND: ResourceKind = ResourceKind::Service;

    fn title(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Service {
    type Draft = ServiceDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("title", "Title", FieldKind::Text).required().column(),
            FieldSpec::new("description", "Description", FieldKind::TextArea).required(),
            FieldSpec::new("image", "Image URL", FieldKind::Url),
            FieldSpec::new("icon_name", "Icon", FieldKind::Select(ICON_NAMES)).column(),
            FieldSpec::new("features", "Features (comma separated)", FieldKind::List).column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("title", &self.title)
            .with("description", &self.description)
            .with("image", &self.image)
            .with("icon_name", opt(self.icon_name.as_ref()))
            .with("features", self.features.join(", "))
    }

    fn to_draft(form: &FormState) -> Result<ServiceDraft, FormError> {
        form.require(Self::fields())?;
        Ok(ServiceDraft {
            title: form.text("title"),
            description: form.text("description"),
            image: form.text("image"),
            icon_name: form.optional("icon_name"),
            features: form.list("features"),
        })
    }
}

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn title(&self) -> String {
        self.title.clone()
    }
}

impl Editable for Project {
    type Draft = ProjectDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("title", "Title", FieldKind::Text).required().column(),
            FieldSpec::new("category", "Category", FieldKind::Select(PROJECT_CATEGORIES)).required().column(),
            FieldSpec::new("location", "Location", FieldKind::Text).required().column(),
            FieldSpec::new("completionDate", "Completion Date", FieldKind::Text).column(),
            FieldSpec::new("image", "Image URL", FieldKind::Url),
            FieldSpec::new("description", "Description", FieldKind::TextArea).required(),
            FieldSpec::new("client", "Client", FieldKind::Text).column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("title", &self.title)
            .with("category", &self.category)
            .with("location", &self.location)
            .with("completionDate", &self.completion_date)
            .with("image", &self.image)
            .with("description", &self.description)
            .with("client", &self.client)
    }

    fn to_draft(form: &FormState) -> Result<ProjectDraft, FormError> {
        form.require(Self::fields())?;
        Ok(ProjectDraft {
            title: form.text("title"),
            category: form.text("category"),
            location: form.text("location"),
            completion_date: form.text("completionDate"),
            image: form.text("image"),
            description: form.text("description"),
            client: form.text("client"),
        })
    }
}

impl Resource for BlogPost {
    const KIND: ResourceKind = ResourceKind::BlogPost;

    fn title(&self) -> String {
        self.title.clone()
    }
}

impl Editable for BlogPost {
    type Draft = BlogPostDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("title", "Title", FieldKind::Text).required().column(),
            FieldSpec::new("excerpt", "Excerpt", FieldKind::TextArea).required(),
            FieldSpec::new("content", "Content", FieldKind::TextArea).required(),
            FieldSpec::new("author", "Author", FieldKind::Text).required().column(),
            FieldSpec::new("publishDate", "Publish Date", FieldKind::Text).column(),
            FieldSpec::new("category", "Category", FieldKind::Select(BLOG_CATEGORIES)).required().column(),
            FieldSpec::new("image", "Image URL", FieldKind::Url),
            FieldSpec::new("readTime", "Read Time", FieldKind::Text),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("title", &self.title)
            .with("excerpt", &self.excerpt)
            .with("content", &self.content)
            .with("author", &self.author)
            .with("publishDate", &self.publish_date)
            .with("category", &self.category)
            .with("image", &self.image)
            .with("readTime", &self.read_time)
    }

    fn to_draft(form: &FormState) -> Result<BlogPostDraft, FormError> {
        form.require(Self::fields())?;
        Ok(BlogPostDraft {
            title: form.text("title"),
            excerpt: form.text("excerpt"),
            content: form.text("content"),
            author: form.text("author"),
            publish_date: form.text("publishDate"),
            category: form.text("category"),
            image: form.text("image"),
            read_time: form.text("readTime"),
        })
    }
}

impl Resource for TeamMember {
    const KIND: ResourceKind = ResourceKind::TeamMember;

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Editable for TeamMember {
    type Draft = TeamMemberDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::Text).required().column(),
            FieldSpec::new("position", "Position", FieldKind::Text).required().column(),
            FieldSpec::new("experience", "Experience", FieldKind::Text).column(),
            FieldSpec::new("image", "Image URL", FieldKind::Url),
            FieldSpec::new("bio", "Bio", FieldKind::TextArea),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("name", &self.name)
            .with("position", &self.position)
            .with("experience", &self.experience)
            .with("image", &self.image)
            .with("bio", &self.bio)
    }

    fn to_draft(form: &FormState) -> Result<TeamMemberDraft, FormError> {
        form.require(Self::fields())?;
        Ok(TeamMemberDraft {
            name: form.text("name"),
            position: form.text("position"),
            experience: form.text("experience"),
            image: form.text("image"),
            bio: form.text("bio"),
        })
    }
}

impl Resource for Testimonial {
    const KIND: ResourceKind = ResourceKind::Testimonial;

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Editable for Testimonial {
    type Draft = TestimonialDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::Text).required().column(),
            FieldSpec::new("company", "Company", FieldKind::Text).column(),
            FieldSpec::new("text", "Testimonial", FieldKind::TextArea).required(),
            FieldSpec::new("image", "Image URL", FieldKind::Url),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("name", &self.name)
            .with("company", &self.company)
            .with("text", &self.text)
            .with("image", &self.image)
    }

    fn to_draft(form: &FormState) -> Result<TestimonialDraft, FormError> {
        form.require(Self::fields())?;
        Ok(TestimonialDraft {
            name: form.text("name"),
            company: form.text("company"),
            text: form.text("text"),
            image: form.text("image"),
        })
    }
}

impl Resource for CompanyStat {
    const KIND: ResourceKind = ResourceKind::CompanyStat;

    fn title(&self) -> String {
        format!("{} {}", self.number, self.label)
    }
}

impl Editable for CompanyStat {
    type Draft = CompanyStatDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("number", "Number", FieldKind::Text).required().column(),
            FieldSpec::new("label", "Label", FieldKind::Text).required().column(),
            FieldSpec::new("icon_name", "Icon", FieldKind::Select(ICON_NAMES)).column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("number", &self.number)
            .with("label", &self.label)
            .with("icon_name", opt(self.icon_name.as_ref()))
    }

    fn to_draft(form: &FormState) -> Result<CompanyStatDraft, FormError> {
        form.require(Self::fields())?;
        Ok(CompanyStatDraft {
            number: form.text("number"),
            label: form.text("label"),
            icon_name: form.optional("icon_name"),
        })
    }
}

impl Resource for Certification {
    const KIND: ResourceKind = ResourceKind::Certification;

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Editable for Certification {
    type Draft = CertificationDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::new("name", "Name", FieldKind::Text).required().column()];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new().with("name", &self.name)
    }

    fn to_draft(form: &FormState) -> Result<CertificationDraft, FormError> {
        form.require(Self::fields())?;
        Ok(CertificationDraft { name: form.text("name") })
    }
}

impl Resource for Award {
    const KIND: ResourceKind = ResourceKind::Award;

    fn title(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}

impl Editable for Award {
    type Draft = AwardDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::Text).required().column(),
            FieldSpec::new("year", "Year", FieldKind::Text).required().column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new().with("name", &self.name).with("year", &self.year)
    }

    fn to_draft(form: &FormState) -> Result<AwardDraft, FormError> {
        form.require(Self::fields())?;
        Ok(AwardDraft { name: form.text("name"), year: form.text("year") })
    }
}

impl Resource for ContactSubmission {
    const KIND: ResourceKind = ResourceKind::ContactSubmission;

    fn title(&self) -> String {
        self.full_name()
    }
}

/// The public contact form. Submissions are created here and never updated.
impl Editable for ContactSubmission {
    type Draft = ContactDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("firstName", "First Name", FieldKind::Text).required().column(),
            FieldSpec::new("lastName", "Last Name", FieldKind::Text).required().column(),
            FieldSpec::new("email", "Email", FieldKind::Email).required().column(),
            FieldSpec::new("phone", "Phone", FieldKind::Text),
            FieldSpec::new("projectType", "Project Type", FieldKind::Select(PROJECT_TYPES)).column(),
            FieldSpec::new("budget", "Budget Range", FieldKind::Select(BUDGET_RANGES)),
            FieldSpec::new("message", "Message", FieldKind::TextArea).required(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("firstName", &self.first_name)
            .with("lastName", &self.last_name)
            .with("email", &self.email)
            .with("phone", opt(self.phone.as_ref()))
            .with("projectType", opt(self.project_type.as_ref()))
            .with("budget", opt(self.budget.as_ref()))
            .with("message", &self.message)
    }

    fn to_draft(form: &FormState) -> Result<ContactDraft, FormError> {
        form.require(Self::fields())?;
        Ok(ContactDraft {
            first_name: form.text("firstName"),
            last_name: form.text("lastName"),
            email: form.text("email"),
            phone: form.optional("phone"),
            project_type: form.optional("projectType"),
            message: form.text("message"),
            budget: form.optional("budget"),
        })
    }
}

// =============================================================================
// SITE MANAGEMENT
// =============================================================================

impl Resource for Site {
    const KIND: ResourceKind = ResourceKind::Site;

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Editable for Site {
    type Draft = SiteDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::Text).required().column(),
            FieldSpec::new("location", "Location", FieldKind::Text).required().column(),
            FieldSpec::new("description", "Description", FieldKind::TextArea),
            FieldSpec::new("start_date", "Start Date", FieldKind::Date).required().column(),
            FieldSpec::new("end_date", "End Date", FieldKind::Date),
            FieldSpec::new("status", "Status", FieldKind::Select(SITE_STATUSES)).required().column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("name", &self.name)
            .with("location", &self.location)
            .with("description", &self.description)
            .with("start_date", &self.start_date)
            .with("end_date", opt(self.end_date.as_ref()))
            .with("status", &self.status)
    }

    fn to_draft(form: &FormState) -> Result<SiteDraft, FormError> {
        form.require(Self::fields())?;
        Ok(SiteDraft {
            name: form.text("name"),
            location: form.text("location"),
            description: form.text("description"),
            start_date: form.text("start_date"),
            end_date: form.optional("end_date"),
            status: form.text("status"),
        })
    }

    fn blank_form() -> FormState {
        FormState::new()
            .with("name", "")
            .with("location", "")
            .with("description", "")
            .with("start_date", "")
            .with("end_date", "")
            .with("status", "active")
    }
}

impl Resource for Worker {
    const KIND: ResourceKind = ResourceKind::Worker;

    fn title(&self) -> String {
        self.name.clone()
    }
}

impl Editable for Worker {
    type Draft = WorkerDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("site_id", "Site", FieldKind::Hidden).required(),
            FieldSpec::new("name", "Name", FieldKind::Text).required().column(),
            FieldSpec::new("position", "Position", FieldKind::Text).column(),
            FieldSpec::new("daily_price", "Daily Price", FieldKind::Number).required().column(),
            FieldSpec::new("phone", "Phone", FieldKind::Text),
            FieldSpec::new("email", "Email", FieldKind::Email),
            FieldSpec::new("is_active", "Active", FieldKind::Checkbox).column(),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("site_id", self.site_id.to_string())
            .with("name", &self.name)
            .with("position", &self.position)
            .with("daily_price", number_text(self.daily_price))
            .with("phone", opt(self.phone.as_ref()))
            .with("email", opt(self.email.as_ref()))
            .with("is_active", flag_text(self.is_active))
    }

    fn to_draft(form: &FormState) -> Result<WorkerDraft, FormError> {
        form.require(Self::fields())?;
        Ok(WorkerDraft {
            site_id: form.id("site_id")?,
            name: form.text("name"),
            position: form.text("position"),
            daily_price: form.number("daily_price")?,
            phone: form.optional("phone"),
            email: form.optional("email"),
            is_active: form.flag("is_active"),
        })
    }

    fn blank_form() -> FormState {
        FormState::new()
            .with("site_id", "")
            .with("name", "")
            .with("position", "")
            .with("daily_price", "0")
            .with("phone", "")
            .with("email", "")
            .with("is_active", "true")
    }
}

impl Resource for DailyActivity {
    const KIND: ResourceKind = ResourceKind::DailyActivity;

    fn title(&self) -> String {
        format!("{} ({})", self.activity_name, self.date)
    }
}

impl Editable for DailyActivity {
    type Draft = DailyActivityDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("site_id", "Site", FieldKind::Hidden).required(),
            FieldSpec::new("date", "Date", FieldKind::Date).required().column(),
            FieldSpec::new("activity_name", "Activity", FieldKind::Text).required().column(),
            FieldSpec::new("description", "Description", FieldKind::TextArea),
            FieldSpec::new("quantity", "Quantity", FieldKind::Number).required().column(),
            FieldSpec::new("unit_price", "Unit Price", FieldKind::Number).required().column(),
            FieldSpec::new("workers_involved", "Worker IDs (comma separated)", FieldKind::List),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        let ids: Vec<String> = self.involved_worker_ids().iter().map(ToString::to_string).collect();
        FormState::new()
            .with("site_id", self.site_id.to_string())
            .with("date", &self.date)
            .with("activity_name", &self.activity_name)
            .with("description", &self.description)
            .with("quantity", number_text(self.quantity))
            .with("unit_price", number_text(self.unit_price))
            .with("workers_involved", ids.join(", "))
    }

    fn to_draft(form: &FormState) -> Result<DailyActivityDraft, FormError> {
        form.require(Self::fields())?;
        let quantity = form.number("quantity")?;
        let unit_price = form.number("unit_price")?;
        Ok(DailyActivityDraft {
            site_id: form.id("site_id")?,
            date: form.text("date"),
            activity_name: form.text("activity_name"),
            description: form.text("description"),
            quantity,
            unit_price,
            total_price: quantity * unit_price,
            workers_involved: form.id_list("workers_involved")?,
        })
    }

    fn blank_form() -> FormState {
        FormState::new()
            .with("site_id", "")
            .with("date", "")
            .with("activity_name", "")
            .with("description", "")
            .with("quantity", "1")
            .with("unit_price", "0")
            .with("workers_involved", "")
    }
}

impl Resource for Cost {
    const KIND: ResourceKind = ResourceKind::Cost;

    fn title(&self) -> String {
        if self.description.is_empty() { format!("{} cost", self.cost_type) } else { self.description.clone() }
    }
}

impl Editable for Cost {
    type Draft = CostDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("site_id", "Site", FieldKind::Hidden).required(),
            FieldSpec::new("cost_type", "Type", FieldKind::Select(COST_TYPES)).required().column(),
            FieldSpec::new("description", "Description", FieldKind::Text).required().column(),
            FieldSpec::new("amount", "Amount", FieldKind::Number).required().column(),
            FieldSpec::new("date", "Date", FieldKind::Date).required().column(),
            FieldSpec::new("category", "Category", FieldKind::Select(COST_CATEGORIES)).column(),
            FieldSpec::new("worker_id", "Worker ID", FieldKind::Number),
            FieldSpec::new("daily_activity_id", "Activity ID", FieldKind::Number),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("site_id", self.site_id.to_string())
            .with("cost_type", &self.cost_type)
            .with("description", &self.description)
            .with("amount", number_text(self.amount))
            .with("date", &self.date)
            .with("category", opt(self.category.as_ref()))
            .with("worker_id", self.worker_id.map(|id| id.to_string()).unwrap_or_default())
            .with("daily_activity_id", self.daily_activity_id.map(|id| id.to_string()).unwrap_or_default())
    }

    fn to_draft(form: &FormState) -> Result<CostDraft, FormError> {
        form.require(Self::fields())?;
        Ok(CostDraft {
            site_id: form.id("site_id")?,
            worker_id: form.optional_id("worker_id")?,
            daily_activity_id: form.optional_id("daily_activity_id")?,
            cost_type: form.text("cost_type"),
            description: form.text("description"),
            amount: form.number("amount")?,
            date: form.text("date"),
            category: form.optional("category"),
        })
    }

    fn blank_form() -> FormState {
        FormState::new()
            .with("site_id", "")
            .with("cost_type", "other")
            .with("description", "")
            .with("amount", "0")
            .with("date", "")
            .with("category", "")
            .with("worker_id", "")
            .with("daily_activity_id", "")
    }
}

impl Resource for Attendance {
    const KIND: ResourceKind = ResourceKind::Attendance;

    fn title(&self) -> String {
        let who = self.worker_name.clone().unwrap_or_else(|| format!("worker {}", self.worker_id));
        format!("{who} on {}", self.date)
    }
}

impl Editable for Attendance {
    type Draft = AttendanceDraft;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("worker_id", "Worker", FieldKind::Hidden).required(),
            FieldSpec::new("date", "Date", FieldKind::Date).required().column(),
            FieldSpec::new("check_in_time", "Check In", FieldKind::Time).column(),
            FieldSpec::new("check_out_time", "Check Out", FieldKind::Time).column(),
            FieldSpec::new("hours_worked", "Hours Worked", FieldKind::Number).column(),
            FieldSpec::new("is_present", "Present", FieldKind::Checkbox).column(),
            FieldSpec::new("notes", "Notes", FieldKind::TextArea),
        ];
        FIELDS
    }

    fn to_form(&self) -> FormState {
        FormState::new()
            .with("worker_id", self.worker_id.to_string())
            .with("date", &self.date)
            .with("check_in_time", &self.check_in_time)
            .with("check_out_time", &self.check_out_time)
            .with("hours_worked", number_text(self.hours_worked))
            .with("is_present", flag_text(self.is_present))
            .with("notes", opt(self.notes.as_ref()))
    }

    fn to_draft(form: &FormState) -> Result<AttendanceDraft, FormError> {
        form.require(Self::fields())?;
        Ok(AttendanceDraft {
            worker_id: form.id("worker_id")?,
            date: form.text("date"),
            check_in_time: form.text("check_in_time"),
            check_out_time: form.text("check_out_time"),
            hours_worked: form.number("hours_worked")?,
            is_present: form.flag("is_present"),
            notes: form.text("notes"),
        })
    }

    /// A standard 08:00-17:00 day, marked present.
    fn blank_form() -> FormState {
        FormState::new()
            .with("worker_id", "")
            .with("date", "")
            .with("check_in_time", "08:00")
            .with("check_out_time", "17:00")
            .with("hours_worked", "8")
            .with("is_present", "true")
            .with("notes", "")
    }
}
