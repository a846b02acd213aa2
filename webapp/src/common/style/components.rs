pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.25em;
  height: 1.25em;
  line-height: 1;
  flex-shrink: 0;
}

.icon-sm { font-size: 0.875rem; }
.icon-lg { font-size: 1.5rem; }
.icon-cyan { color: #06B6D4; }
.icon-teal { color: #14B8A6; }
.icon-blue { color: #3B82F6; }
.icon-emerald { color: #10B981; }

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              opacity var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

/* the gradient comes from the accent palette, set inline */
.btn-accent {
  color: var(--text-inverse);
  border: none;
  box-shadow: var(--shadow-sm);
}

.btn-accent:hover {
  opacity: 0.9;
}

.btn-outline {
  color: var(--text-primary);
  border: 1px solid var(--border-strong);
  background: transparent;
}

.btn-outline:hover {
  background-color: var(--hover-surface);
}

.btn-icon {
  padding: var(--space-2);
  border: none;
  background: transparent;
  color: var(--text-primary);
  font-size: 1.25rem;
}

.btn-icon:hover {
  background-color: var(--hover-surface);
}

/* Chips */
.chip {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  font-size: 0.875rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-2xl);
  padding: var(--space-5);
  box-shadow: var(--shadow-sm);
  transition: transform var(--transition-normal) var(--easing-spring);
}

.card-sm {
  border-radius: var(--radius-xl);
  padding: var(--space-4);
}

.lift:hover { transform: translateY(-3px); }
.lift-sm:hover { transform: translateY(-2px); }
.lift-lg:hover { transform: translateY(-6px) scale(1.01); }
.nudge:hover { transform: translateX(2px); }

.muted {
  color: var(--text-tertiary);
  font-size: 0.75rem;
}

.gradient-text {
  background-clip: text;
  -webkit-background-clip: text;
  color: transparent;
}
"#;
