pub const SECTION_STYLES: &str = r#"
/* Page sections */
.page {
  min-height: 100vh;
  position: relative;
  background: linear-gradient(to bottom, var(--background), var(--background), var(--background-tint));
  color: var(--text-primary);
}

.backdrop {
  pointer-events: none;
  position: absolute;
  inset: 0;
  overflow: hidden;
}

.blob {
  position: absolute;
  border-radius: var(--radius-full);
  filter: blur(64px);
}

.blob-primary { top: -96px; left: -80px; width: 320px; height: 320px; opacity: 0.3; }
.blob-secondary { top: 160px; right: -96px; width: 384px; height: 384px; opacity: 0.25; }

.section {
  position: relative;
  padding: var(--space-12) 0;
  border-top: 1px solid var(--border);
}

.section-tinted {
  background-color: var(--surface-muted);
  padding: var(--space-10) 0;
}

.section-header {
  margin-bottom: var(--space-8);
  scroll-margin-top: var(--header-height);
}

.section-heading {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.section-heading h2 {
  font-size: 1.875rem;
  font-weight: 700;
  letter-spacing: -0.025em;
}

.section-subtitle {
  margin-top: var(--space-2);
  color: var(--text-secondary);
}

.grid { display: grid; gap: var(--space-6); }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }

/* Hero */
.hero {
  padding: var(--space-24) 0;
  border-top: none;
}

.hero-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-10);
  align-items: center;
}

.hero-greeting {
  font-size: 0.875rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.hero-title {
  margin-top: var(--space-2);
  font-size: 3.75rem;
  font-weight: 800;
  letter-spacing: -0.025em;
}

.hero-role {
  margin-top: var(--space-2);
  font-size: 1.875rem;
  font-weight: 600;
  color: var(--text-secondary);
}

.hero-about {
  margin-top: var(--space-6);
  max-width: 42rem;
  color: var(--text-secondary);
}

.row {
  margin-top: var(--space-6);
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-3);
}

.profile-frame {
  display: flex;
  justify-content: center;
  animation: pop-in var(--transition-slow) ease-out both;
}

.profile-image {
  width: 256px;
  height: 256px;
  border-radius: var(--radius-full);
  border: 4px solid var(--surface);
  box-shadow: var(--shadow-lg);
  object-fit: cover;
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.85); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}

.rise-in {
  animation: rise-in 450ms ease-out both;
}

/* About */
.fact-list {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-3);
  font-size: 0.875rem;
  list-style: none;
}

.fact-key { font-weight: 500; }

/* Resume */
.timeline {
  position: relative;
  padding-left: var(--space-6);
  list-style: none;
}

.timeline-line {
  position: absolute;
  left: var(--space-2);
  top: 0;
  bottom: 0;
  width: 1px;
  background: linear-gradient(to bottom, rgba(45, 212, 191, 0.7), rgba(34, 211, 238, 0.5), rgba(96, 165, 250, 0.7));
}

.timeline-item { margin-bottom: var(--space-8); }

.timeline-period {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.timeline-dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background: linear-gradient(to right, #14B8A6, #3B82F6);
}

.bullets {
  margin-top: var(--space-2);
  padding-left: var(--space-5);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.subheading {
  font-weight: 600;
  margin-bottom: var(--space-4);
}

/* Stat cards */
.stat {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.stat-value {
  font-size: 1.25rem;
  font-weight: 600;
  letter-spacing: -0.025em;
}

.stat-sub {
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Projects */
.project {
  display: flex;
  flex-direction: column;
}

.project-blurb {
  flex: 1;
  margin-top: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.project-detail {
  margin-top: var(--space-1);
  display: flex;
  align-items: flex-start;
  gap: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.project-links {
  margin-top: var(--space-3);
  display: flex;
  gap: var(--space-3);
  font-size: 0.875rem;
}

.underline {
  text-decoration: underline;
  text-underline-offset: 4px;
}

/* Skills */
.checklist {
  list-style: none;
  display: grid;
  gap: var(--space-2);
}

.checklist li {
  display: flex;
  align-items: flex-start;
  gap: var(--space-2);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Certifications */
.cert {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-3);
  font-size: 0.875rem;
}

.cert-body {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  min-width: 0;
}

.truncate {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* Organizations & awards */
.stack {
  list-style: none;
  display: grid;
  gap: var(--space-4);
  font-size: 0.875rem;
}

.award {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  transition: transform var(--transition-fast) var(--easing-standard);
}

/* Contact */
.contact-value {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.credit {
  margin-top: var(--space-8);
  text-align: center;
}

.page-footer {
  padding: var(--space-10) 0;
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-tertiary);
  border-top: 1px solid var(--border);
}

.not-found {
  padding: var(--space-24) 0;
  text-align: center;
}
"#;
