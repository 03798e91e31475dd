//! Global CSS styles for pixseek.
//!
//! Dark gallery chrome with a single accent colour. Toast colours are set
//! inline from `NoticeKind::style()`; everything else lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #121416;
  --void-border: #1f2326;

  /* Accent */
  --accent: #4e75ff;
  --accent-hover: #6c8cff;
  --accent-glow: rgba(78, 117, 255, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-sans: 'Montserrat', 'Segoe UI', 'Helvetica Neue', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;

  /* Layout */
  --gallery-gap: 24px;
  --gallery-columns: 3;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 16px;
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
}

img {
  display: block;
  max-width: 100%;
}

ul {
  list-style: none;
}

.hidden {
  display: none !important;
}

/* === Page Layout === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  background: rgba(10, 10, 10, 0.92);
  border-bottom: 1px solid var(--void-border);
  backdrop-filter: blur(6px);
}

.page-title {
  font-size: var(--text-xl);
  font-weight: 600;
  letter-spacing: 0.04em;
}

.page-content {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  padding: 2rem;
}

/* === Search Form === */
.form {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  flex: 1;
  max-width: 560px;
}

.search-input-wrapper {
  position: relative;
  flex: 1;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  opacity: 0.6;
  pointer-events: none;
}

.input-field {
  width: 100%;
  padding: 0.625rem 1rem;
  background: transparent;
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.search-input {
  padding-left: 2.25rem;
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 1px var(--accent), 0 0 16px var(--accent-glow);
}

/* === Buttons === */
.btn-primary {
  padding: 0.625rem 1.5rem;
  background: var(--accent);
  border: none;
  border-radius: 4px;
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary:hover {
  background: var(--accent-hover);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: default;
  transform: none;
}

.load-more-button {
  min-width: 200px;
  padding: 0.75rem 2rem;
}

.icon-btn {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  background: rgba(0, 0, 0, 0.4);
  border: none;
  border-radius: 50%;
  color: var(--text-primary);
  font-size: 2rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover:not(:disabled) {
  background: rgba(255, 255, 255, 0.15);
}

.icon-btn:disabled {
  opacity: 0.25;
  cursor: default;
}

/* === Gallery === */
.gallery {
  display: grid;
  grid-template-columns: repeat(var(--gallery-columns), minmax(0, 1fr));
  gap: var(--gallery-gap);
  width: 100%;
  max-width: 1128px;
}

.gallery-item {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  overflow: hidden;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-item:hover {
  transform: scale(1.02);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.6);
}

.gallery-link {
  display: block;
  color: inherit;
  text-decoration: none;
}

.gallery-image {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.image-info {
  display: flex;
  justify-content: space-around;
  padding: 0.5rem 0.25rem;
}

.info-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  font-size: var(--text-xs);
}

.info-item b {
  color: var(--text-secondary);
  font-weight: 600;
}

.info-item p {
  font-family: var(--font-mono);
}

@media (max-width: 900px) {
  :root { --gallery-columns: 2; }
}

@media (max-width: 560px) {
  :root { --gallery-columns: 1; }
  .page-header { flex-direction: column; gap: 0.75rem; }
}

/* === Loader === */
.loader {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.loader__spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--void-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

.loader__label {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Toasts === */
.toasts {
  position: fixed;
  z-index: 1100;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  pointer-events: none;
}

.toasts--top-right {
  top: 1rem;
  right: 1rem;
  align-items: flex-end;
}

.toasts--top-left {
  top: 1rem;
  left: 1rem;
}

.toasts--bottom-right {
  bottom: 1rem;
  right: 1rem;
  align-items: flex-end;
}

.toasts--bottom-left {
  bottom: 1rem;
  left: 1rem;
}

.toast {
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 0.25rem;
  width: 100%;
  border-radius: 4px;
  color: #fff;
  font-size: var(--text-base);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
  cursor: pointer;
  pointer-events: auto;
  animation: toast-in var(--transition-normal);
}

.toast__title {
  font-weight: 600;
}

.toast--warning {
  color: #1a1a1a;
}

@keyframes toast-in {
  from { opacity: 0; transform: translateX(24px); }
  to { opacity: 1; transform: translateX(0); }
}

/* === Lightbox === */
.sl-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(0, 0, 0, 0.88);
  outline: none;
  animation: fade-in var(--transition-normal);
}

.sl-figure {
  display: flex;
  flex-direction: column;
  align-items: center;
  max-width: 80vw;
  max-height: 90vh;
}

.sl-image {
  max-width: 80vw;
  max-height: 80vh;
  object-fit: contain;
  box-shadow: 0 8px 40px rgba(0, 0, 0, 0.7);
}

.sl-caption {
  margin-top: 0.75rem;
  padding: 0.25rem 0.75rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  text-align: center;
  opacity: 0;
  animation: fade-in var(--transition-normal) forwards;
}

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.sl-counter {
  position: absolute;
  top: 1.5rem;
  left: 1.5rem;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
