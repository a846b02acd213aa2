pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #06B6D4;          /* Cyan accent */
  --primary-dark: #0891B2;
  --secondary: #14B8A6;        /* Teal for checklists and awards */
  --accent: #3B82F6;           /* Blue for highlights */
  --success: #10B981;

  /* Neutrals */
  --neutral-50: #FAFAFA;
  --neutral-100: #F5F5F5;
  --neutral-200: #E5E5E5;
  --neutral-300: #D4D4D4;
  --neutral-400: #A3A3A3;
  --neutral-500: #737373;
  --neutral-600: #525252;
  --neutral-700: #404040;
  --neutral-800: #262626;
  --neutral-900: #171717;
  --neutral-950: #0A0A0A;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-tint: rgba(236, 254, 255, 0.4);
  --surface: rgba(255, 255, 255, 0.7);
  --surface-muted: rgba(255, 255, 255, 0.4);
  --header-surface: rgba(255, 255, 255, 0.7);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-disabled: var(--neutral-400);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: rgba(229, 229, 229, 0.7);
  --border-strong: var(--neutral-300);
  --hover-surface: var(--neutral-50);

  /* Layout */
  --header-height: 64px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 800ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
  --easing-spring: cubic-bezier(0.34, 1.56, 0.64, 1);
}

/* the theme controller toggles this class on the document element */
:root.dark {
  --background: var(--neutral-950);
  --background-tint: rgba(8, 51, 68, 0.2);
  --surface: rgba(23, 23, 23, 0.7);
  --surface-muted: rgba(23, 23, 23, 0.3);
  --header-surface: rgba(10, 10, 10, 0.7);

  --text-primary: #F5F5F5;
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --text-disabled: var(--neutral-500);

  --border: rgba(38, 38, 38, 0.7);
  --border-strong: var(--neutral-700);
  --hover-surface: var(--neutral-800);
}"#;
